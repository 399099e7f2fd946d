//! Administrative user management endpoints.
//!
//! Accounts live on the hosted auth provider; these handlers orchestrate its
//! admin API. The super-admin protection is enforced through
//! [`AdminPolicy`](tela_core::auth::AdminPolicy) before any destructive call
//! reaches the provider.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use tela_core::auth::NewUser;
use tela_model::AuthUser;

use crate::errors::{AppError, AppResult};
use crate::infra::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SetAdminRequest {
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<AuthUser>>> {
    let users = state.auth.list_users().await?;
    Ok(Json(users))
}

pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> AppResult<Json<Value>> {
    let user = state
        .auth
        .create_user(NewUser {
            email: request.email,
            password: request.password,
            name: request.name,
        })
        .await?;

    info!(target: "user.admin", user_id = %user.id, action = "create");
    Ok(Json(json!({ "success": true, "user": user })))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Value>> {
    let user = state
        .auth
        .get_user_by_id(&user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    if state.admin_policy.is_protected(&user.email) {
        return Err(AppError::forbidden("The super admin cannot be deleted"));
    }

    state.auth.delete_user(&user_id).await?;

    info!(target: "user.admin", %user_id, action = "delete");
    Ok(Json(json!({ "success": true })))
}

pub async fn set_admin(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<SetAdminRequest>,
) -> AppResult<Json<Value>> {
    let user = state
        .auth
        .get_user_by_id(&user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    if state.admin_policy.is_protected(&user.email) && !request.is_admin {
        return Err(AppError::forbidden("The super admin cannot be demoted"));
    }

    // Merge onto the existing metadata so unrelated fields survive.
    let mut metadata = user.user_metadata;
    metadata.is_admin = request.is_admin;
    state.auth.set_metadata(&user_id, &metadata).await?;

    info!(
        target: "user.admin",
        %user_id,
        is_admin = request.is_admin,
        action = "set_admin"
    );
    Ok(Json(json!({ "success": true })))
}
