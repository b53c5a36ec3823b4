use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One row of the level table: the cumulative points needed to hold a level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelRow {
    pub level: u32,
    #[serde(rename = "requiredTotal")]
    pub required_total: i64,
    #[serde(default)]
    pub reward: Option<String>,
}

/// Club member as stored in players.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub points: i64,
    pub wins: i64,
    pub losses: i64,
    #[serde(default)]
    pub club: Option<String>,
    #[serde(rename = "monthlyDone", default)]
    pub monthly_done: Vec<String>,
    #[serde(default)]
    pub streak: Option<String>,
    #[serde(default)]
    pub best: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// Scheduled club event
#[derive(Debug, Clone)]
pub struct Event {
    pub event_type: String,
    pub title: String,
    pub datetime: NaiveDateTime,
    pub club: String,
    pub location: String,
    pub price_eur: f64,
    pub spots_left: i64,
    pub spots_total: i64,
}

impl Event {
    /// Lowercased haystack for substring search
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.event_type, self.club, self.location, self.datetime
        )
        .to_lowercase()
    }
}

/// Played match between two or more participants
#[derive(Debug, Clone)]
pub struct Match {
    pub players: Vec<String>,
    pub winner: String,
    pub datetime: NaiveDateTime,
    pub club: String,
    pub match_type: String,
    pub score: String,
    pub points_earned: HashMap<String, i64>,
    pub note: Option<String>,
}

impl Match {
    pub fn involves(&self, player_id: &str) -> bool {
        self.players.iter().any(|p| p == player_id)
    }
}

/// Monthly mission from the config document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mission {
    pub id: String,
    pub title: String,
    pub desc: String,
    pub points: i64,
}

/// Club-wide configuration document
#[derive(Debug, Clone)]
pub struct ClubConfig {
    pub club_name: String,
    pub default_theme: Option<String>,
    pub monthly_missions: Vec<Mission>,
}

// --- Document structures ---
//
// Raw shapes as they appear on disk. Datetimes are strings here; the
// validation boundary parses them before anything reaches the core.

#[derive(Debug, Deserialize, Serialize)]
pub struct EventDoc {
    #[serde(rename = "type")]
    pub event_type: String,
    pub title: String,
    pub datetime: String,
    pub club: String,
    pub location: String,
    pub price_eur: f64,
    pub spots_left: i64,
    pub spots_total: i64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MatchDoc {
    pub players: Vec<String>,
    pub winner: String,
    pub datetime: String,
    pub club: String,
    #[serde(rename = "type")]
    pub match_type: String,
    pub score: String,
    #[serde(rename = "pointsEarned", default)]
    pub points_earned: HashMap<String, i64>,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ClubConfigDoc {
    #[serde(rename = "clubName")]
    pub club_name: String,
    #[serde(rename = "defaultTheme", default)]
    pub default_theme: Option<String>,
    #[serde(rename = "monthlyMissions", default)]
    pub monthly_missions: Vec<Mission>,
}
