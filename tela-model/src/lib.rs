//! Core data model definitions shared across Tela crates.
#![allow(missing_docs)]

pub mod content;
pub mod favorites;
pub mod ids;
pub mod slider;
pub mod user;

// Intentionally curated re-exports for downstream consumers.
pub use content::{ContentKind, Episode, Genre, Season, Title, UnknownContentKind};
pub use favorites::FavoriteEntry;
pub use ids::ContentId;
pub use slider::SliderEntry;
pub use user::{AuthUser, UserMetadata};
