use serde::Serialize;

use crate::domain::models::{Event, Mission};
use crate::domain::progress::LevelProgress;
use crate::domain::roster::RankedPlayer;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgressView {
    pub current: u32,
    pub current_floor: i64,
    pub next_target: i64,
    pub progress: f64,
    pub is_max: bool,
    pub points_to_next: i64,
}

impl LevelProgressView {
    pub fn new(info: &LevelProgress, points: i64) -> Self {
        Self {
            current: info.current,
            current_floor: info.current_floor,
            next_target: info.next_target,
            progress: info.progress,
            is_max: info.is_max,
            points_to_next: (info.next_target - points).max(0),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventItem {
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

impl EventItem {
    pub fn from_event(event: &Event) -> Self {
        Self {
            event_type: event.event_type.clone(),
            title: event.title.clone(),
            datetime: event.datetime.format("%Y-%m-%dT%H:%M:%S").to_string(),
            club: event.club.clone(),
            location: event.location.clone(),
            price_eur: event.price_eur,
            spots_left: event.spots_left,
            spots_total: event.spots_total,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRow {
    pub rank: usize,
    pub id: String,
    pub name: String,
    pub level: u32,
    pub points: i64,
    pub record: String,
    pub win_rate: f64,
    pub club: Option<String>,
}

impl PlayerRow {
    pub fn from_ranked(rank: usize, ranked: &RankedPlayer) -> Self {
        Self {
            rank,
            id: ranked.player.id.clone(),
            name: ranked.player.name.clone(),
            level: ranked.level,
            points: ranked.player.points,
            record: format!("{}-{}", ranked.player.wins, ranked.player.losses),
            win_rate: ranked.win_rate,
            club: ranked.player.club.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionCard {
    pub id: String,
    pub title: String,
    pub desc: String,
    pub points: i64,
    pub done: bool,
}

impl MissionCard {
    pub fn from_mission(mission: &Mission, done: bool) -> Self {
        Self {
            id: mission.id.clone(),
            title: mission.title.clone(),
            desc: mission.desc.clone(),
            points: mission.points,
            done,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProgress {
    pub player_id: String,
    pub name: String,
    pub points: i64,
    pub progress: LevelProgressView,
}

// --- Home ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeStats {
    pub players: usize,
    pub events: usize,
    pub matches: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub theme: String,
    pub year: i32,
    pub club_name: String,
    pub stats: HomeStats,
    pub upcoming: Vec<EventItem>,
    pub top_players: Vec<PlayerRow>,
    pub featured: Option<PlayerProgress>,
    pub missions: Vec<MissionCard>,
}

// --- Pass ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerOption {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelCard {
    pub level: u32,
    pub required_total: i64,
    pub reward: Option<String>,
    pub unlocked: bool,
    pub current: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassView {
    pub theme: String,
    pub year: i32,
    pub roster: Vec<PlayerOption>,
    pub selected: PlayerProgress,
    pub levels: Vec<LevelCard>,
}

// --- Events ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsView {
    pub theme: String,
    pub year: i32,
    pub query: String,
    pub items: Vec<EventItem>,
    pub no_results: bool,
}

// --- Players ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayersView {
    pub theme: String,
    pub year: i32,
    pub query: String,
    pub sort: String,
    pub rows: Vec<PlayerRow>,
}

// --- Player profile ---

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileHead {
    pub id: String,
    pub name: String,
    pub club: Option<String>,
    pub level: u32,
    pub points: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub wins: i64,
    pub losses: i64,
    pub win_rate: f64,
    pub match_count: i64,
    pub streak: Option<String>,
    pub best: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementSlot {
    pub filled: bool,
    pub achievement: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchItem {
    pub won: bool,
    pub score: String,
    #[serde(rename = "type")]
    pub match_type: String,
    pub datetime: String,
    pub club: String,
    pub opponents: String,
    pub points_earned: i64,
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub theme: String,
    pub year: i32,
    pub head: ProfileHead,
    pub progress: LevelProgressView,
    pub stats: ProfileStats,
    pub missions: Vec<MissionCard>,
    pub achievements: Vec<AchievementSlot>,
    pub recent: Vec<MatchItem>,
    pub no_matches: bool,
}
