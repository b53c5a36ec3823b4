use std::collections::HashMap;

use super::models::Match;

/// Matches involving the player, most recent first, truncated to `limit`.
///
/// The sort is stable, so matches sharing a timestamp keep their log order.
pub fn recent_matches<'a>(matches: &'a [Match], player_id: &str, limit: usize) -> Vec<&'a Match> {
    let mut involved: Vec<&Match> = matches.iter().filter(|m| m.involves(player_id)).collect();
    involved.sort_by(|a, b| b.datetime.cmp(&a.datetime));
    involved.truncate(limit);
    involved
}

pub fn is_win(game: &Match, player_id: &str) -> bool {
    game.winner == player_id
}

pub fn points_earned(game: &Match, player_id: &str) -> i64 {
    game.points_earned.get(player_id).copied().unwrap_or(0)
}

/// Display names of every other participant, comma-separated, in match order.
/// Ids missing from the name map fall back to the raw id.
pub fn opponents_label(game: &Match, player_id: &str, names: &HashMap<&str, &str>) -> String {
    game.players
        .iter()
        .filter(|p| p.as_str() != player_id)
        .map(|id| names.get(id.as_str()).copied().unwrap_or(id.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn game(players: &[&str], winner: &str, datetime: &str) -> Match {
        Match {
            players: players.iter().map(|p| p.to_string()).collect(),
            winner: winner.to_string(),
            datetime: NaiveDateTime::parse_from_str(datetime, "%Y-%m-%dT%H:%M").unwrap(),
            club: "Padel Norte".to_string(),
            match_type: "friendly".to_string(),
            score: "6-3".to_string(),
            points_earned: HashMap::from([(winner.to_string(), 20)]),
            note: None,
        }
    }

    #[test]
    fn test_recent_matches_filters_and_orders() {
        let log = vec![
            game(&["ana", "leo"], "ana", "2026-01-10T18:00"),
            game(&["leo", "sofia"], "sofia", "2026-02-01T18:00"),
            game(&["ana", "sofia"], "sofia", "2026-03-05T18:00"),
        ];

        let recent = recent_matches(&log, "ana", 10);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].datetime, log[2].datetime);
        assert!(recent.iter().all(|m| m.involves("ana")));
    }

    #[test]
    fn test_recent_matches_truncates_to_limit() {
        let log = vec![
            game(&["ana", "leo"], "ana", "2026-01-10T18:00"),
            game(&["ana", "leo"], "leo", "2026-01-11T18:00"),
            game(&["ana", "leo"], "ana", "2026-01-12T18:00"),
        ];
        assert_eq!(recent_matches(&log, "ana", 2).len(), 2);
    }

    #[test]
    fn test_recent_matches_keeps_log_order_on_tied_timestamps() {
        let log = vec![
            game(&["ana", "leo"], "ana", "2026-01-10T18:00"),
            game(&["ana", "sofia"], "ana", "2026-01-10T18:00"),
        ];
        let recent = recent_matches(&log, "ana", 10);
        assert_eq!(recent[0].players[1], "leo");
        assert_eq!(recent[1].players[1], "sofia");
    }

    #[test]
    fn test_opponents_label_resolves_names_with_id_fallback() {
        let doubles = game(&["ana", "leo", "sofia", "ghost"], "ana", "2026-01-10T18:00");
        let names = HashMap::from([("ana", "Ana"), ("leo", "Leo"), ("sofia", "Sofía")]);
        assert_eq!(opponents_label(&doubles, "ana", &names), "Leo, Sofía, ghost");
    }

    #[test]
    fn test_points_earned_defaults_to_zero() {
        let m = game(&["ana", "leo"], "ana", "2026-01-10T18:00");
        assert_eq!(points_earned(&m, "ana"), 20);
        assert_eq!(points_earned(&m, "leo"), 0);
    }

    #[test]
    fn test_is_win() {
        let m = game(&["ana", "leo"], "ana", "2026-01-10T18:00");
        assert!(is_win(&m, "ana"));
        assert!(!is_win(&m, "leo"));
    }
}
