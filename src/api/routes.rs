use axum::{Router, routing::get};
use std::sync::Arc;

use crate::api::handlers::{
    AppState,
    pages::{get_events, get_home, get_pass, get_player_profile, get_players},
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/home", get(get_home))
        .route("/api/pass", get(get_pass))
        .route("/api/events", get(get_events))
        .route("/api/players", get(get_players))
        .route("/api/player/:id", get(get_player_profile))
        .with_state(state)
}
