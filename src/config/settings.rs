#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub upcoming_limit: usize,
    pub top_players_limit: usize,
    pub recent_matches_limit: usize,
    pub achievement_slots: usize,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            upcoming_limit: 4,
            top_players_limit: 6,
            recent_matches_limit: 8,
            achievement_slots: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ThemeSettings {
    pub default_theme: &'static str,
    pub storage_key: &'static str,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            default_theme: "light",
            // key the presentation layer uses to remember the choice
            storage_key: "pp_theme",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub view: ViewSettings,
    pub theme: ThemeSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            view: ViewSettings::default(),
            theme: ThemeSettings::default(),
        }
    }
}

// The config is passed explicitly (Dependency Injection) rather than held
// in a global, so the view builders stay pure functions of their inputs.
