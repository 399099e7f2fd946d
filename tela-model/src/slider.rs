use serde::{Deserialize, Serialize};

use crate::{ContentId, ContentKind};

/// One entry of the home-screen banner slider.
///
/// All entries live in a single list under the `slider` key; at most one entry
/// exists per `(content_id, kind)` pair, enforced by lookup-before-insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SliderEntry {
    pub url: String,
    /// Set when the banner was uploaded through us, so the stored object can
    /// be removed together with the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub content_id: ContentId,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub created_at: i64,
}

impl SliderEntry {
    pub fn references(&self, content_id: &ContentId, kind: ContentKind) -> bool {
        self.content_id == *content_id && self.kind == kind
    }
}
