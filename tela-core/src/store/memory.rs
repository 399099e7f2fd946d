use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use crate::error::Result;

use super::KeyValueStore;

/// In-memory backend for tests and development mode.
///
/// Keys enumerate in lexicographic order, which makes prefix scans a simple
/// ordered range walk.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<BTreeMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<Value>> {
        let entries = self.entries.read().await;
        Ok(entries
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(_, v)| v.clone())
            .collect())
    }

    async fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries.read().await.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn prefix_scan_is_bounded() {
        let store = MemoryStore::new();
        store.set("movie:1", json!({"a": 1})).await.unwrap();
        store.set("movie:2", json!({"a": 2})).await.unwrap();
        store.set("series:1", json!({"a": 3})).await.unwrap();
        store.set("slider", json!([])).await.unwrap();

        let movies = store.get_by_prefix("movie:").await.unwrap();
        assert_eq!(movies.len(), 2);

        let keys = store.keys().await.unwrap();
        assert_eq!(keys.len(), 4);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryStore::new();
        store.set("movie:1", json!({})).await.unwrap();
        store.del("movie:1").await.unwrap();
        store.del("movie:1").await.unwrap();
        assert!(store.get("movie:1").await.unwrap().is_none());
    }
}
