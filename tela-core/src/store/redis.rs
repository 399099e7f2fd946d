use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use serde_json::Value;

use crate::error::{CatalogError, Result};

use super::KeyValueStore;

/// Hosted key-value backend over Redis.
///
/// Values are stored as JSON strings. Enumeration uses cursored SCAN, so key
/// order is whatever the server yields; callers must not rely on it.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore").finish_non_exhaustive()
    }
}

fn store_err(err: redis::RedisError) -> CatalogError {
    CatalogError::Store(err.to_string())
}

impl RedisStore {
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(store_err)?;
        let conn = client.get_connection_manager().await.map_err(store_err)?;
        Ok(Self { conn })
    }

    async fn scan_keys(&self, pattern: &str) -> Result<Vec<String>> {
        let mut conn = self.conn.clone();
        let mut keys = Vec::new();
        let mut cursor: u64 = 0;
        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(pattern)
                .arg("COUNT")
                .arg(100)
                .query_async(&mut conn)
                .await
                .map_err(store_err)?;
            keys.extend(batch);
            cursor = next;
            if cursor == 0 {
                break;
            }
        }
        Ok(keys)
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<Value>> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn.get(key).await.map_err(store_err)?;
        raw.map(|s| serde_json::from_str(&s))
            .transpose()
            .map_err(Into::into)
    }

    async fn set(&self, key: &str, value: Value) -> Result<()> {
        let mut conn = self.conn.clone();
        let raw = serde_json::to_string(&value)?;
        let _: () = conn.set(key, raw).await.map_err(store_err)?;
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = conn.del(key).await.map_err(store_err)?;
        Ok(())
    }

    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<Value>> {
        let keys = self.scan_keys(&format!("{prefix}*")).await?;
        let mut values = Vec::with_capacity(keys.len());
        for key in keys {
            if let Some(value) = self.get(&key).await? {
                values.push(value);
            }
        }
        Ok(values)
    }

    async fn keys(&self) -> Result<Vec<String>> {
        self.scan_keys("*").await
    }
}
