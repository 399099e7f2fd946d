//! Self-service account endpoints backed by the hosted auth provider.

use axum::{Extension, Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::info;

use tela_core::auth::NewUser;
use tela_model::AuthUser;

use crate::errors::AppResult;
use crate::infra::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePasswordRequest {
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> AppResult<Json<Value>> {
    let user = state
        .auth
        .create_user(NewUser {
            email: request.email,
            password: request.password,
            name: request.name,
        })
        .await?;

    info!(target: "user.account", user_id = %user.id, action = "signup");
    Ok(Json(json!({ "success": true, "user": user })))
}

pub async fn update_password(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<UpdatePasswordRequest>,
) -> AppResult<Json<Value>> {
    state
        .auth
        .update_password(&user.id, &request.new_password)
        .await?;

    info!(target: "user.account", user_id = %user.id, action = "update_password");
    Ok(Json(json!({ "success": true })))
}
