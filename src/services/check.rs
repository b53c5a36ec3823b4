use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::domain::progress;
use crate::store::Store;

/// Validates a data directory and prints a human-readable summary
pub struct CheckService {
    data_dir: PathBuf,
}

impl CheckService {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
        }
    }

    pub fn run(&self) -> Result<()> {
        let snapshot = Store::new(&self.data_dir).load_snapshot()?;

        println!(
            "{} {}",
            "OK".green().bold(),
            self.data_dir.display().to_string().bold()
        );
        println!("  club:     {}", snapshot.club.club_name);
        println!("  levels:   {}", snapshot.levels.len());
        println!("  players:  {}", snapshot.players.len());
        println!("  events:   {}", snapshot.events.len());
        println!("  matches:  {}", snapshot.matches.len());
        println!("  missions: {}", snapshot.club.monthly_missions.len());

        if let Some(top) = snapshot
            .players
            .iter()
            .max_by_key(|p| p.points)
        {
            let level = progress::level_of(&snapshot.levels, top.points);
            println!(
                "  top:      {} ({} pts, level {})",
                top.name.cyan(),
                top.points,
                level
            );
        }

        let overbooked: Vec<&str> = snapshot
            .events
            .iter()
            .filter(|e| e.spots_left > e.spots_total)
            .map(|e| e.title.as_str())
            .collect();
        if !overbooked.is_empty() {
            println!(
                "{} events with more free spots than capacity: {}",
                "warning:".yellow(),
                overbooked.join(", ")
            );
        }

        Ok(())
    }
}
