use serde::Deserialize;

use crate::config::settings::AppConfig;
use crate::store::Snapshot;

pub mod pages;

pub struct AppState {
    pub snapshot: Snapshot,
    pub config: AppConfig,
}

#[derive(Deserialize)]
pub struct PageParams {
    pub player: Option<String>,
    pub q: Option<String>,
    pub sort: Option<String>,
    pub theme: Option<String>,
}
