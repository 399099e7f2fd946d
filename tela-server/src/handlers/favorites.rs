use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde_json::{Value, json};

use tela_core::catalog::favorites;
use tela_model::{AuthUser, ContentId, FavoriteEntry};

use crate::errors::AppResult;
use crate::infra::app_state::AppState;

pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> AppResult<Json<Vec<FavoriteEntry>>> {
    let favorites = state.store.favorites(&user.id).await?;
    Ok(Json(favorites))
}

pub async fn add(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(entry): Json<FavoriteEntry>,
) -> AppResult<Json<Value>> {
    favorites::add_favorite(&state.store, &user.id, entry).await?;
    Ok(Json(json!({ "success": true })))
}

pub async fn remove(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(content_id): Path<String>,
) -> AppResult<Json<Value>> {
    favorites::remove_favorite(&state.store, &user.id, &ContentId::from(content_id)).await?;
    Ok(Json(json!({ "success": true })))
}
