use serde::{Deserialize, Serialize};

use crate::{ContentId, ContentKind};

/// A favorited title inside a user's `favorites:<userId>` list.
///
/// At most one entry per content id within a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    pub content_id: ContentId,
    #[serde(rename = "type")]
    pub kind: ContentKind,
}
