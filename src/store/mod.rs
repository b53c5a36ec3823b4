use anyhow::{Context, Result};
use log::info;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::models::{
    ClubConfig, ClubConfigDoc, Event, EventDoc, LevelRow, Match, MatchDoc, Player,
};
use crate::domain::validate;
use crate::errors;

/// Reads the five fixture documents from a data directory
pub struct Store {
    data_dir: PathBuf,
}

/// Immutable, validated view of the whole data set for one page view
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub club: ClubConfig,
    pub levels: Vec<LevelRow>,
    pub players: Vec<Player>,
    pub events: Vec<Event>,
    pub matches: Vec<Match>,
}

impl Store {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Load and validate all five documents; any failure is fatal and names
    /// the document that caused it
    pub fn load_snapshot(&self) -> Result<Snapshot> {
        let club_doc: ClubConfigDoc = self.read_document("config")?;
        let level_rows: Vec<LevelRow> = self.read_document("levels")?;
        let player_rows: Vec<Player> = self.read_document("players")?;
        let event_docs: Vec<EventDoc> = self.read_document("events")?;
        let match_docs: Vec<MatchDoc> = self.read_document("matches")?;

        let snapshot = Snapshot {
            club: validate::validate_config(club_doc)
                .with_context(|| errors::validate_context("config"))?,
            levels: validate::validate_levels(level_rows)
                .with_context(|| errors::validate_context("levels"))?,
            players: validate::validate_players(player_rows)
                .with_context(|| errors::validate_context("players"))?,
            events: validate::validate_events(event_docs)
                .with_context(|| errors::validate_context("events"))?,
            matches: validate::validate_matches(match_docs)
                .with_context(|| errors::validate_context("matches"))?,
        };

        info!(
            "Loaded snapshot: {} players, {} events, {} matches, {} levels",
            snapshot.players.len(),
            snapshot.events.len(),
            snapshot.matches.len(),
            snapshot.levels.len()
        );

        Ok(snapshot)
    }

    fn read_document<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let path = self.document_path(name);
        let json = errors::with_load_context(fs::read_to_string(&path), name)
            .with_context(|| format!("Expected file: {}", path.display()))?;
        errors::with_parse_context(serde_json::from_str(&json), name)
    }

    fn document_path(&self, name: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", name))
    }
}

impl Snapshot {
    pub fn find_player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Resolve a requested player id, falling back to the first roster entry.
    /// Validation guarantees the roster is non-empty, so this only fails on a
    /// snapshot constructed without it.
    pub fn resolve_player(&self, requested: Option<&str>) -> Result<&Player> {
        let fallback = self
            .players
            .first()
            .context("Player roster is empty")?;
        Ok(requested
            .and_then(|id| self.find_player(id))
            .unwrap_or(fallback))
    }

    /// Id-to-display-name lookup for opponent labels
    pub fn player_names(&self) -> HashMap<&str, &str> {
        self.players
            .iter()
            .map(|p| (p.id.as_str(), p.name.as_str()))
            .collect()
    }
}
