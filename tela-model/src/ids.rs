use uuid::Uuid;

/// Opaque content identifier, stored and transmitted as a string.
///
/// Caller-supplied ids (for example from an external metadata import) are kept
/// as-is; generated ids are UUIDv7 so they stay time-ordered without the
/// same-millisecond collision risk of raw timestamps.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ContentId(pub String);

impl ContentId {
    pub fn generate() -> Self {
        ContentId(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ContentId {
    fn from(value: String) -> Self {
        ContentId(value)
    }
}

impl From<&str> for ContentId {
    fn from(value: &str) -> Self {
        ContentId(value.to_string())
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
