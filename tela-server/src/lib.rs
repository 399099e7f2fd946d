//! HTTP backend for the Tela streaming catalog.

pub mod errors;
pub mod handlers;
pub mod infra;
pub mod middleware;
pub mod routes;

pub use infra::app_state::AppState;
