//! External metadata providers.

pub mod tmdb;

pub use tmdb::{ProviderError, TmdbClient};
