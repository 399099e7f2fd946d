//! Key-value persistence seam.
//!
//! The hosted store is a flat mapping from string keys to JSON values with no
//! transactions and no compare-and-swap; every backend implements the same
//! five-operation [`KeyValueStore`] contract. [`CatalogStore`] layers the
//! catalog's key schema on top so raw key strings never leak into handlers.

mod memory;
mod redis;

pub use self::memory::MemoryStore;
pub use self::redis::RedisStore;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use tela_model::{ContentId, ContentKind, FavoriteEntry, SliderEntry, Title};

use crate::error::Result;

/// Minimal contract over the hosted key-value store.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>>;
    async fn set(&self, key: &str, value: Value) -> Result<()>;
    async fn del(&self, key: &str) -> Result<()>;
    /// All values whose key starts with `prefix`, in enumeration order.
    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<Value>>;
    /// Every key in the store.
    async fn keys(&self) -> Result<Vec<String>>;
}

const SLIDER_KEY: &str = "slider";
const FAVORITES_PREFIX: &str = "favorites:";

/// Typed access to the catalog's logical collections.
///
/// Each collection (`movie:`, `series:`, `slider`, `favorites:<userId>`) is
/// only ever touched through these accessors; this is the single place key
/// strings are built.
#[derive(Clone)]
pub struct CatalogStore {
    inner: Arc<dyn KeyValueStore>,
}

impl fmt::Debug for CatalogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogStore").finish_non_exhaustive()
    }
}

impl CatalogStore {
    pub fn new(inner: Arc<dyn KeyValueStore>) -> Self {
        Self { inner }
    }

    fn title_key(kind: ContentKind, id: &ContentId) -> String {
        format!("{}{}", kind.key_prefix(), id)
    }

    fn favorites_key(user_id: &str) -> String {
        format!("{FAVORITES_PREFIX}{user_id}")
    }

    pub async fn title(&self, kind: ContentKind, id: &ContentId) -> Result<Option<Title>> {
        let value = self.inner.get(&Self::title_key(kind, id)).await?;
        value
            .map(serde_json::from_value)
            .transpose()
            .map_err(Into::into)
    }

    pub async fn put_title(&self, kind: ContentKind, id: &ContentId, title: &Title) -> Result<()> {
        let value = serde_json::to_value(title)?;
        self.inner.set(&Self::title_key(kind, id), value).await
    }

    pub async fn delete_title(&self, kind: ContentKind, id: &ContentId) -> Result<()> {
        self.inner.del(&Self::title_key(kind, id)).await
    }

    /// Every title in the given namespace.
    pub async fn titles_of(&self, kind: ContentKind) -> Result<Vec<Title>> {
        let values = self.inner.get_by_prefix(kind.key_prefix()).await?;
        values
            .into_iter()
            .map(|v| serde_json::from_value(v).map_err(Into::into))
            .collect()
    }

    pub async fn slider(&self) -> Result<Vec<SliderEntry>> {
        let value = self.inner.get(SLIDER_KEY).await?;
        match value {
            Some(v) => serde_json::from_value(v).map_err(Into::into),
            None => Ok(Vec::new()),
        }
    }

    pub async fn set_slider(&self, entries: &[SliderEntry]) -> Result<()> {
        let value = serde_json::to_value(entries)?;
        self.inner.set(SLIDER_KEY, value).await
    }

    pub async fn favorites(&self, user_id: &str) -> Result<Vec<FavoriteEntry>> {
        let value = self.inner.get(&Self::favorites_key(user_id)).await?;
        match value {
            Some(v) => serde_json::from_value(v).map_err(Into::into),
            None => Ok(Vec::new()),
        }
    }

    pub async fn set_favorites(&self, user_id: &str, entries: &[FavoriteEntry]) -> Result<()> {
        let value = serde_json::to_value(entries)?;
        self.inner.set(&Self::favorites_key(user_id), value).await
    }

    /// Ids of every user that has a favorites list, derived from key
    /// enumeration. O(total keys); only walked by the admin delete cascade.
    pub async fn favorites_user_ids(&self) -> Result<Vec<String>> {
        let keys = self.inner.keys().await?;
        Ok(keys
            .into_iter()
            .filter_map(|k| k.strip_prefix(FAVORITES_PREFIX).map(str::to_string))
            .collect())
    }
}
