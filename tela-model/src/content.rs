use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::ContentId;

/// The two content namespaces the catalog manages.
///
/// The kind decides the store key prefix and the Portuguese category prefixes
/// the home screen groups by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Movie,
    Series,
}

impl ContentKind {
    /// Store key prefix for this namespace, e.g. `movie:<id>`.
    pub fn key_prefix(&self) -> &'static str {
        match self {
            ContentKind::Movie => "movie:",
            ContentKind::Series => "series:",
        }
    }

    /// Prefix every category label of this kind carries.
    pub fn category_prefix(&self) -> &'static str {
        match self {
            ContentKind::Movie => "Filme ~ ",
            ContentKind::Series => "Séries ~ ",
        }
    }

    /// The synthetic "new releases" category for this kind.
    pub fn release_category(&self) -> &'static str {
        match self {
            ContentKind::Movie => "Filme ~ Lançamentos",
            ContentKind::Series => "Séries ~ Lançamentos",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Movie => "movie",
            ContentKind::Series => "series",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for strings that name neither content namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownContentKind(pub String);

impl fmt::Display for UnknownContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown content kind: {}", self.0)
    }
}

impl std::error::Error for UnknownContentKind {}

impl std::str::FromStr for ContentKind {
    type Err = UnknownContentKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "movie" => Ok(ContentKind::Movie),
            "series" => Ok(ContentKind::Series),
            other => Err(UnknownContentKind(other.to_string())),
        }
    }
}

/// A genre tag as delivered by the external metadata API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub name: String,
}

/// One episode of a series season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub episode_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

/// One season of a series, episodes in declared order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub season_number: u32,
    #[serde(default)]
    pub episodes: Vec<Episode>,
}

/// A catalog title, persisted as one JSON value under `movie:<id>` or
/// `series:<id>`.
///
/// Updates are full replacements, so unknown fields round-trip through the
/// flattened `extra` map rather than being dropped. `added_at` is immutable
/// once set; `categories` carry at most one release category, kept in sync by
/// the release-window policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ContentId>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Comma-joined display genres, e.g. `"Ação, Drama"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Structured genre tags from the metadata API, only consulted when the
    /// title is created without manual categories.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tmdb_genres: Vec<Genre>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub categories: Vec<String>,
    /// Epoch-millisecond insertion time, set on first persist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<i64>,
    /// Absent means visible; only an explicit `false` hides a title from the
    /// home feed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_in_home: Option<bool>,
    #[serde(default)]
    pub in_slider: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seasons: Option<Vec<Season>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Title {
    pub fn shown_in_home(&self) -> bool {
        self.show_in_home != Some(false)
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}
