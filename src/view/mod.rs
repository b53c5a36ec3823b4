pub mod events;
pub mod home;
pub mod models;
pub mod pass;
pub mod player;
pub mod players;

use chrono::{Datelike, Utc};

use crate::config::settings::AppConfig;
use crate::domain::models::ClubConfig;

/// Presentation context threaded explicitly into every page builder, so the
/// builders stay pure functions of snapshot + parameters
#[derive(Debug, Clone)]
pub struct ViewContext {
    pub theme: String,
    pub year: i32,
}

impl ViewContext {
    /// Resolve the theme: explicit request, then the club document default,
    /// then the built-in default
    pub fn new(requested: Option<&str>, club: &ClubConfig, config: &AppConfig) -> Self {
        let theme = requested
            .map(str::to_string)
            .or_else(|| club.default_theme.clone())
            .unwrap_or_else(|| config.theme.default_theme.to_string());

        Self {
            theme,
            year: Utc::now().year(),
        }
    }
}
