use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use tela_model::AuthUser;

use crate::errors::AppError;
use crate::infra::app_state::AppState;

/// Resolve the bearer token against the auth provider and stash the account
/// in request extensions for downstream extractors.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer_token(&request)?;
    let user = state
        .auth
        .get_user(&token)
        .await?
        .ok_or_else(|| AppError::unauthorized("Unauthorized"))?;

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Gate a route group on the admin policy. Must sit inside `auth_middleware`
/// in the layer stack so the `AuthUser` extension is already present.
pub async fn admin_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<AuthUser>()
        .ok_or_else(|| AppError::unauthorized("Unauthorized"))?;

    if !state.admin_policy.is_admin(user) {
        return Err(AppError::forbidden("Admin access required"));
    }

    Ok(next.run(request).await)
}

fn extract_bearer_token(request: &Request) -> Result<String, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::unauthorized("Unauthorized"))?;

    auth_header
        .strip_prefix("Bearer ")
        .map(str::to_string)
        .ok_or_else(|| AppError::unauthorized("Unauthorized"))
}
