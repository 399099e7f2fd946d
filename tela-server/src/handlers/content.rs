//! Title CRUD for both content namespaces.
//!
//! Movies and series share one implementation parameterized by
//! [`ContentKind`]; the route table binds the thin wrappers below.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use serde_json::{Value, json};

use tela_model::{ContentId, ContentKind, Title};

use crate::errors::{AppError, AppResult};
use crate::infra::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub id: ContentId,
}

fn kind_label(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Movie => "Movie",
        ContentKind::Series => "Series",
    }
}

async fn list_titles(state: AppState, kind: ContentKind) -> AppResult<Json<Vec<Title>>> {
    let titles = state.store.titles_of(kind).await?;
    Ok(Json(titles))
}

async fn get_title(state: AppState, kind: ContentKind, id: String) -> AppResult<Json<Title>> {
    let id = ContentId::from(id);
    let title = state
        .store
        .title(kind, &id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("{} not found", kind_label(kind))))?;
    Ok(Json(title))
}

async fn create_title(
    state: AppState,
    kind: ContentKind,
    title: Title,
) -> AppResult<Json<CreatedResponse>> {
    let id = state.catalog.create(kind, title).await?;
    Ok(Json(CreatedResponse { success: true, id }))
}

async fn update_title(
    state: AppState,
    kind: ContentKind,
    id: String,
    title: Title,
) -> AppResult<Json<Value>> {
    let id = ContentId::from(id);
    state.catalog.update(kind, &id, title).await?;
    Ok(Json(json!({ "success": true })))
}

async fn delete_title(state: AppState, kind: ContentKind, id: String) -> AppResult<Json<Value>> {
    let id = ContentId::from(id);
    state.catalog.delete(kind, &id).await?;
    Ok(Json(json!({ "success": true })))
}

pub async fn list_movies(State(state): State<AppState>) -> AppResult<Json<Vec<Title>>> {
    list_titles(state, ContentKind::Movie).await
}

pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Title>> {
    get_title(state, ContentKind::Movie, id).await
}

pub async fn create_movie(
    State(state): State<AppState>,
    Json(title): Json<Title>,
) -> AppResult<Json<CreatedResponse>> {
    create_title(state, ContentKind::Movie, title).await
}

pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(title): Json<Title>,
) -> AppResult<Json<Value>> {
    update_title(state, ContentKind::Movie, id, title).await
}

pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    delete_title(state, ContentKind::Movie, id).await
}

pub async fn list_series(State(state): State<AppState>) -> AppResult<Json<Vec<Title>>> {
    list_titles(state, ContentKind::Series).await
}

pub async fn get_series(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Title>> {
    get_title(state, ContentKind::Series, id).await
}

pub async fn create_series(
    State(state): State<AppState>,
    Json(title): Json<Title>,
) -> AppResult<Json<CreatedResponse>> {
    create_title(state, ContentKind::Series, title).await
}

pub async fn update_series(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(title): Json<Title>,
) -> AppResult<Json<Value>> {
    update_title(state, ContentKind::Series, id, title).await
}

pub async fn delete_series(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    delete_title(state, ContentKind::Series, id).await
}

/// Admin maintenance sweep keeping the release categories in sync with the
/// rolling window.
pub async fn refresh_releases(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let updated = state.catalog.refresh_release_categories().await?;
    Ok(Json(json!({ "success": true, "updated": updated })))
}
