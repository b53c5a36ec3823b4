use crate::config::settings::AppConfig;
use crate::domain::{progress, roster, schedule};
use crate::store::Snapshot;

use super::ViewContext;
use super::models::{
    EventItem, HomeStats, HomeView, LevelProgressView, MissionCard, PlayerProgress, PlayerRow,
};

pub fn build(snapshot: &Snapshot, config: &AppConfig, ctx: &ViewContext) -> HomeView {
    let mut ranked = roster::decorate_all(&snapshot.players, &snapshot.levels);
    roster::sort_players(&mut ranked, roster::SortKey::PointsDesc);
    ranked.truncate(config.view.top_players_limit);

    let top_players: Vec<PlayerRow> = ranked
        .iter()
        .enumerate()
        .map(|(i, r)| PlayerRow::from_ranked(i + 1, r))
        .collect();

    let featured = ranked.first().map(|top| {
        let info = progress::progress_to_next(&snapshot.levels, top.player.points);
        PlayerProgress {
            player_id: top.player.id.clone(),
            name: top.player.name.clone(),
            points: top.player.points,
            progress: LevelProgressView::new(&info, top.player.points),
        }
    });

    let upcoming = schedule::upcoming(&snapshot.events, config.view.upcoming_limit)
        .into_iter()
        .map(EventItem::from_event)
        .collect();

    let missions = snapshot
        .club
        .monthly_missions
        .iter()
        .map(|m| MissionCard::from_mission(m, false))
        .collect();

    HomeView {
        theme: ctx.theme.clone(),
        year: ctx.year,
        club_name: snapshot.club.club_name.clone(),
        stats: HomeStats {
            players: snapshot.players.len(),
            events: snapshot.events.len(),
            matches: snapshot.matches.len(),
        },
        upcoming,
        top_players,
        featured,
        missions,
    }
}
