use anyhow::Result;

use crate::config::settings::AppConfig;
use crate::domain::{matchlog, progress, roster};
use crate::store::Snapshot;

use super::ViewContext;
use super::models::{
    AchievementSlot, LevelProgressView, MatchItem, MissionCard, PlayerView, ProfileHead,
    ProfileStats,
};

pub fn build(
    snapshot: &Snapshot,
    requested: Option<&str>,
    config: &AppConfig,
    ctx: &ViewContext,
) -> Result<PlayerView> {
    let player = snapshot.resolve_player(requested)?;
    let info = progress::progress_to_next(&snapshot.levels, player.points);
    let names = snapshot.player_names();

    let recent: Vec<MatchItem> = matchlog::recent_matches(
        &snapshot.matches,
        &player.id,
        config.view.recent_matches_limit,
    )
    .into_iter()
    .map(|game| MatchItem {
        won: matchlog::is_win(game, &player.id),
        score: game.score.clone(),
        match_type: game.match_type.clone(),
        datetime: game.datetime.format("%Y-%m-%dT%H:%M:%S").to_string(),
        club: game.club.clone(),
        opponents: matchlog::opponents_label(game, &player.id, &names),
        points_earned: matchlog::points_earned(game, &player.id),
        note: game.note.clone(),
    })
    .collect();
    let no_matches = recent.is_empty();

    let missions = snapshot
        .club
        .monthly_missions
        .iter()
        .map(|m| MissionCard::from_mission(m, player.monthly_done.contains(&m.id)))
        .collect();

    // Fixed-size slot row; earned achievements fill from the left.
    let achievements = (0..config.view.achievement_slots)
        .map(|i| AchievementSlot {
            filled: i < player.achievements.len(),
            achievement: player.achievements.get(i).cloned(),
        })
        .collect();

    Ok(PlayerView {
        theme: ctx.theme.clone(),
        year: ctx.year,
        head: ProfileHead {
            id: player.id.clone(),
            name: player.name.clone(),
            club: player.club.clone(),
            level: info.current,
            points: player.points,
        },
        progress: LevelProgressView::new(&info, player.points),
        stats: ProfileStats {
            wins: player.wins,
            losses: player.losses,
            win_rate: roster::win_rate(player),
            match_count: player.wins + player.losses,
            streak: player.streak.clone(),
            best: player.best.clone(),
        },
        missions,
        achievements,
        recent,
        no_matches,
    })
}
