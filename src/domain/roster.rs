use super::models::{LevelRow, Player};
use super::progress;

/// Player decorated with the derived fields the tables sort and filter on
#[derive(Debug, Clone)]
pub struct RankedPlayer {
    pub player: Player,
    pub level: u32,
    pub win_rate: f64,
    pub match_count: i64,
}

/// Win rate as a percentage in [0, 100]; exactly 0 with no decided matches
pub fn win_rate(player: &Player) -> f64 {
    let total = player.wins + player.losses;
    if total == 0 {
        return 0.0;
    }
    100.0 * player.wins as f64 / total as f64
}

pub fn decorate(player: &Player, levels: &[LevelRow]) -> RankedPlayer {
    RankedPlayer {
        level: progress::level_of(levels, player.points),
        win_rate: win_rate(player),
        match_count: player.wins + player.losses,
        player: player.clone(),
    }
}

pub fn decorate_all(players: &[Player], levels: &[LevelRow]) -> Vec<RankedPlayer> {
    players.iter().map(|p| decorate(p, levels)).collect()
}

/// Supported roster orderings, all descending with points as the tie-break
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    PointsDesc,
    LevelDesc,
    WinRateDesc,
    MatchesDesc,
}

impl SortKey {
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("level_desc") => SortKey::LevelDesc,
            Some("winrate_desc") => SortKey::WinRateDesc,
            Some("matches_desc") => SortKey::MatchesDesc,
            _ => SortKey::PointsDesc,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SortKey::PointsDesc => "points_desc",
            SortKey::LevelDesc => "level_desc",
            SortKey::WinRateDesc => "winrate_desc",
            SortKey::MatchesDesc => "matches_desc",
        }
    }
}

/// Stable sort, so equal rows keep their roster order
pub fn sort_players(players: &mut [RankedPlayer], key: SortKey) {
    players.sort_by(|a, b| match key {
        SortKey::PointsDesc => b.player.points.cmp(&a.player.points),
        SortKey::LevelDesc => b
            .level
            .cmp(&a.level)
            .then(b.player.points.cmp(&a.player.points)),
        SortKey::WinRateDesc => b
            .win_rate
            .total_cmp(&a.win_rate)
            .then(b.player.points.cmp(&a.player.points)),
        SortKey::MatchesDesc => b
            .match_count
            .cmp(&a.match_count)
            .then(b.player.points.cmp(&a.player.points)),
    });
}

/// Case-insensitive substring match over name and club; empty query keeps all
pub fn filter_players(players: Vec<RankedPlayer>, query: &str) -> Vec<RankedPlayer> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return players;
    }

    players
        .into_iter()
        .filter(|p| {
            let haystack = format!(
                "{} {}",
                p.player.name,
                p.player.club.as_deref().unwrap_or("")
            )
            .to_lowercase();
            haystack.contains(&needle)
        })
        .collect()
}
