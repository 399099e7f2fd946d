//! Authenticated proxy to the external movie-metadata API.
//!
//! Admin-only: responses are forwarded verbatim, the API key never leaves the
//! server.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppResult;
use crate::infra::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
}

pub async fn search_movie(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Value>> {
    let data = state.tmdb.search_movie(&params.query).await?;
    Ok(Json(data))
}

pub async fn search_tv(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Value>> {
    let data = state.tmdb.search_tv(&params.query).await?;
    Ok(Json(data))
}

pub async fn movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let data = state.tmdb.movie(&id).await?;
    Ok(Json(data))
}

pub async fn tv(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Json<Value>> {
    let data = state.tmdb.tv(&id).await?;
    Ok(Json(data))
}

pub async fn season(
    State(state): State<AppState>,
    Path((id, season)): Path<(String, u32)>,
) -> AppResult<Json<Value>> {
    let data = state.tmdb.season(&id, season).await?;
    Ok(Json(data))
}
