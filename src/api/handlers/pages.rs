use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;

use crate::view::{self, ViewContext};

use super::{AppState, PageParams};

fn context(state: &AppState, params: &PageParams) -> ViewContext {
    ViewContext::new(params.theme.as_deref(), &state.snapshot.club, &state.config)
}

pub async fn get_home(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    let ctx = context(&state, &params);
    Json(view::home::build(&state.snapshot, &state.config, &ctx)).into_response()
}

pub async fn get_pass(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    let ctx = context(&state, &params);
    match view::pass::build(&state.snapshot, params.player.as_deref(), &ctx) {
        Ok(page) => Json(page).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("View Error: {}", e)).into_response(),
    }
}

pub async fn get_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    let ctx = context(&state, &params);
    let query = params.q.as_deref().unwrap_or("");
    Json(view::events::build(&state.snapshot, query, &ctx)).into_response()
}

pub async fn get_players(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    let ctx = context(&state, &params);
    let query = params.q.as_deref().unwrap_or("");
    Json(view::players::build(
        &state.snapshot,
        query,
        params.sort.as_deref(),
        &ctx,
    ))
    .into_response()
}

pub async fn get_player_profile(
    State(state): State<Arc<AppState>>,
    Path(player_id): Path<String>,
    Query(params): Query<PageParams>,
) -> impl IntoResponse {
    let ctx = context(&state, &params);
    match view::player::build(&state.snapshot, Some(&player_id), &state.config, &ctx) {
        Ok(page) => Json(page).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, format!("View Error: {}", e)).into_response(),
    }
}
