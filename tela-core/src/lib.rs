//! Core library for the Tela streaming catalog.
//!
//! Holds everything below the HTTP surface: the key-value store seam with its
//! Redis and in-memory backends, the catalog curation logic (genre
//! classification, release windows, home-feed capping, content lifecycle,
//! favorites), and clients for the hosted auth, metadata, and object-storage
//! services.

pub mod auth;
pub mod catalog;
pub mod error;
pub mod providers;
pub mod storage;
pub mod store;

pub use catalog::{
    ContentLifecycleCoordinator, HOME_VISIBLE_LIMIT, apply_home_cap, classify, is_recent_release,
};
pub use error::{CatalogError, Result};
pub use store::{CatalogStore, KeyValueStore, MemoryStore, RedisStore};
