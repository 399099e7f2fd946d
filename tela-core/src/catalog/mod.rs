//! Catalog curation logic.
//!
//! Pure policy (genre classification, release window) plus the store-backed
//! bookkeeping that keeps the denormalized projections (title records, the
//! slider list, per-user favorites) consistent without transactions.

pub mod classify;
pub mod favorites;
pub mod home_cap;
pub mod lifecycle;
pub mod release_window;

pub use classify::classify;
pub use home_cap::{HOME_VISIBLE_LIMIT, apply_home_cap};
pub use lifecycle::ContentLifecycleCoordinator;
pub use release_window::is_recent_release;
