use anyhow::Result;

use crate::domain::progress;
use crate::store::Snapshot;

use super::ViewContext;
use super::models::{LevelCard, LevelProgressView, PassView, PlayerOption, PlayerProgress};

pub fn build(snapshot: &Snapshot, requested: Option<&str>, ctx: &ViewContext) -> Result<PassView> {
    let player = snapshot.resolve_player(requested)?;
    let info = progress::progress_to_next(&snapshot.levels, player.points);

    let mut options: Vec<&crate::domain::models::Player> = snapshot.players.iter().collect();
    options.sort_by(|a, b| b.points.cmp(&a.points));
    let roster = options
        .into_iter()
        .map(|p| PlayerOption {
            id: p.id.clone(),
            name: p.name.clone(),
        })
        .collect();

    let levels = snapshot
        .levels
        .iter()
        .map(|row| LevelCard {
            level: row.level,
            required_total: row.required_total,
            reward: row.reward.clone(),
            unlocked: player.points >= row.required_total,
            current: row.level == info.current,
        })
        .collect();

    Ok(PassView {
        theme: ctx.theme.clone(),
        year: ctx.year,
        roster,
        selected: PlayerProgress {
            player_id: player.id.clone(),
            name: player.name.clone(),
            points: player.points,
            progress: LevelProgressView::new(&info, player.points),
        },
        levels,
    })
}
