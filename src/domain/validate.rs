use anyhow::Result;
use chrono::{DateTime, NaiveDateTime};
use log::warn;
use std::collections::HashSet;

use super::models::{ClubConfig, ClubConfigDoc, Event, EventDoc, LevelRow, Match, MatchDoc, Player};

/// Parse a document datetime, accepting RFC 3339 and the common naive forms
pub fn parse_document_datetime(date_str: &str) -> Result<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Ok(dt.naive_utc());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt);
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(date_str, "%Y-%m-%dT%H:%M") {
        return Ok(dt);
    }

    anyhow::bail!("Failed to parse datetime: {}", date_str)
}

/// Normalize and check the level table.
///
/// Rows are sorted ascending by level. A non-monotonic or duplicated
/// `requiredTotal` sequence is kept (the progress core guards the degenerate
/// span) but logged, since it usually means a data entry mistake.
pub fn validate_levels(mut rows: Vec<LevelRow>) -> Result<Vec<LevelRow>> {
    for row in &rows {
        if row.level < 1 {
            anyhow::bail!("Level must be >= 1, got {}", row.level);
        }
        if row.required_total < 0 {
            anyhow::bail!(
                "Level {} has negative required total: {}",
                row.level,
                row.required_total
            );
        }
    }

    rows.sort_by_key(|row| row.level);

    let mut seen = HashSet::new();
    for row in &rows {
        if !seen.insert(row.level) {
            anyhow::bail!("Duplicate level in table: {}", row.level);
        }
    }

    for pair in rows.windows(2) {
        if pair[1].required_total < pair[0].required_total {
            warn!(
                "Level table is not non-decreasing: level {} requires {} but level {} requires {}",
                pair[0].level, pair[0].required_total, pair[1].level, pair[1].required_total
            );
        } else if pair[1].required_total == pair[0].required_total {
            warn!(
                "Levels {} and {} share the threshold {}",
                pair[0].level, pair[1].level, pair[0].required_total
            );
        }
    }

    Ok(rows)
}

/// Check the roster: unique ids, non-negative counters, at least one player.
///
/// The non-empty requirement is what lets the page builders fall back to the
/// first roster player for unknown ids.
pub fn validate_players(players: Vec<Player>) -> Result<Vec<Player>> {
    if players.is_empty() {
        anyhow::bail!("Player roster is empty");
    }

    let mut seen = HashSet::new();
    for player in &players {
        if !seen.insert(player.id.as_str()) {
            anyhow::bail!("Duplicate player id: {}", player.id);
        }
        if player.points < 0 || player.wins < 0 || player.losses < 0 {
            anyhow::bail!("Player {} has negative counters", player.id);
        }
    }

    Ok(players)
}

pub fn validate_events(docs: Vec<EventDoc>) -> Result<Vec<Event>> {
    docs.into_iter()
        .map(|doc| {
            let datetime = parse_document_datetime(&doc.datetime)?;
            Ok(Event {
                event_type: doc.event_type,
                title: doc.title,
                datetime,
                club: doc.club,
                location: doc.location,
                price_eur: doc.price_eur,
                spots_left: doc.spots_left,
                spots_total: doc.spots_total,
            })
        })
        .collect()
}

pub fn validate_matches(docs: Vec<MatchDoc>) -> Result<Vec<Match>> {
    docs.into_iter()
        .map(|doc| {
            if doc.players.len() < 2 {
                anyhow::bail!(
                    "Match at {} has fewer than two participants",
                    doc.datetime
                );
            }
            if !doc.players.contains(&doc.winner) {
                anyhow::bail!(
                    "Match winner {} is not among participants",
                    doc.winner
                );
            }
            let datetime = parse_document_datetime(&doc.datetime)?;
            Ok(Match {
                players: doc.players,
                winner: doc.winner,
                datetime,
                club: doc.club,
                match_type: doc.match_type,
                score: doc.score,
                points_earned: doc.points_earned,
                note: doc.note,
            })
        })
        .collect()
}

pub fn validate_config(doc: ClubConfigDoc) -> Result<ClubConfig> {
    for mission in &doc.monthly_missions {
        if mission.points < 0 {
            anyhow::bail!("Mission {} has negative points", mission.id);
        }
    }

    Ok(ClubConfig {
        club_name: doc.club_name,
        default_theme: doc.default_theme,
        monthly_missions: doc.monthly_missions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn player(id: &str) -> Player {
        Player {
            id: id.to_string(),
            name: id.to_string(),
            points: 10,
            wins: 1,
            losses: 1,
            club: None,
            monthly_done: vec![],
            streak: None,
            best: None,
            achievements: vec![],
        }
    }

    #[test]
    fn test_parse_datetime_formats() {
        assert!(parse_document_datetime("2026-09-12T18:30:00Z").is_ok());
        assert!(parse_document_datetime("2026-09-12T18:30:00").is_ok());
        assert!(parse_document_datetime("2026-09-12T18:30").is_ok());
        assert!(parse_document_datetime("12/09/2026").is_err());
    }

    #[test]
    fn test_duplicate_player_id_rejected() {
        let result = validate_players(vec![player("ana"), player("ana")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_roster_rejected() {
        assert!(validate_players(vec![]).is_err());
    }

    #[test]
    fn test_winner_must_participate() {
        let doc = MatchDoc {
            players: vec!["ana".to_string(), "leo".to_string()],
            winner: "sofia".to_string(),
            datetime: "2026-09-12T18:30".to_string(),
            club: "Padel Norte".to_string(),
            match_type: "friendly".to_string(),
            score: "6-3".to_string(),
            points_earned: HashMap::new(),
            note: None,
        };
        assert!(validate_matches(vec![doc]).is_err());
    }

    #[test]
    fn test_levels_sorted_and_unique() {
        let rows = vec![
            LevelRow {
                level: 2,
                required_total: 100,
                reward: None,
            },
            LevelRow {
                level: 1,
                required_total: 0,
                reward: None,
            },
        ];
        let validated = validate_levels(rows).unwrap();
        assert_eq!(validated[0].level, 1);
        assert_eq!(validated[1].level, 2);

        let duplicated = vec![
            LevelRow {
                level: 1,
                required_total: 0,
                reward: None,
            },
            LevelRow {
                level: 1,
                required_total: 50,
                reward: None,
            },
        ];
        assert!(validate_levels(duplicated).is_err());
    }
}
