use axum::{
    Json, Router, middleware,
    routing::{delete, get, post, put},
};
use serde_json::{Value, json};

use crate::handlers::{account, content, favorites, slider, tmdb, users};
use crate::infra::app_state::AppState;
use crate::middleware::auth::{admin_middleware, auth_middleware};

/// Assemble the full route table.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(create_public_routes())
        .merge(create_user_routes(state.clone()))
        .merge(create_admin_routes(state.clone()))
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Catalog reads and signup need no token.
fn create_public_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/movies", get(content::list_movies))
        .route("/movies/{id}", get(content::get_movie))
        .route("/series", get(content::list_series))
        .route("/series/{id}", get(content::get_series))
        .route("/slider", get(slider::list))
        .route("/signup", post(account::signup))
}

/// Routes any authenticated user may call.
fn create_user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/favorites", get(favorites::list).post(favorites::add))
        .route("/favorites/{content_id}", delete(favorites::remove))
        .route("/update-password", post(account::update_password))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Mutating catalog routes, user administration, and the metadata proxy.
///
/// `admin_middleware` is layered innermost so `auth_middleware` has already
/// resolved the account by the time the policy check runs.
fn create_admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/movies", post(content::create_movie))
        .route(
            "/movies/{id}",
            put(content::update_movie).delete(content::delete_movie),
        )
        .route("/series", post(content::create_series))
        .route(
            "/series/{id}",
            put(content::update_series).delete(content::delete_series),
        )
        .route("/slider/upload", post(slider::upload))
        .route("/slider/{index}", delete(slider::remove))
        .route("/users", get(users::list).post(users::create))
        .route("/users/{id}", delete(users::delete))
        .route("/users/{user_id}/admin", put(users::set_admin))
        .route("/tmdb/search/movie", get(tmdb::search_movie))
        .route("/tmdb/search/tv", get(tmdb::search_tv))
        .route("/tmdb/movie/{id}", get(tmdb::movie))
        .route("/tmdb/tv/{id}", get(tmdb::tv))
        .route("/tmdb/tv/{id}/season/{season}", get(tmdb::season))
        .route("/catalog/releases/refresh", post(content::refresh_releases))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin_middleware,
        ))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
