use serde::{Deserialize, Serialize};

/// A user account as reported by the hosted auth provider.
///
/// The provider owns the account; the catalog only reads the id, email and
/// the admin flag in the metadata blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

/// Free-form per-user metadata; fields we do not interpret round-trip through
/// `extra` so admin toggles never clobber them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
