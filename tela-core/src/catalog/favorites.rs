use tela_model::{ContentId, FavoriteEntry};

use crate::error::Result;
use crate::store::CatalogStore;

/// Add a favorite, guarded by an exists-by-content-id lookup so a repeated
/// add never duplicates the entry.
pub async fn add_favorite(store: &CatalogStore, user_id: &str, entry: FavoriteEntry) -> Result<()> {
    let mut favorites = store.favorites(user_id).await?;
    if favorites.iter().any(|f| f.content_id == entry.content_id) {
        return Ok(());
    }
    favorites.push(entry);
    store.set_favorites(user_id, &favorites).await
}

/// Remove a favorite by content id. Removing an absent entry is a no-op, not
/// an error.
pub async fn remove_favorite(
    store: &CatalogStore,
    user_id: &str,
    content_id: &ContentId,
) -> Result<()> {
    let mut favorites = store.favorites(user_id).await?;
    favorites.retain(|f| f.content_id != *content_id);
    store.set_favorites(user_id, &favorites).await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tela_model::ContentKind;

    use crate::store::MemoryStore;

    use super::*;

    fn entry(id: &str) -> FavoriteEntry {
        FavoriteEntry {
            content_id: ContentId::from(id),
            kind: ContentKind::Movie,
        }
    }

    #[tokio::test]
    async fn add_is_guarded_against_duplicates() {
        let store = CatalogStore::new(Arc::new(MemoryStore::new()));

        add_favorite(&store, "u1", entry("m1")).await.unwrap();
        add_favorite(&store, "u1", entry("m1")).await.unwrap();
        add_favorite(&store, "u1", entry("m2")).await.unwrap();

        assert_eq!(store.favorites("u1").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn remove_filters_out_and_tolerates_absence() {
        let store = CatalogStore::new(Arc::new(MemoryStore::new()));
        add_favorite(&store, "u1", entry("m1")).await.unwrap();

        remove_favorite(&store, "u1", &ContentId::from("m1"))
            .await
            .unwrap();
        assert!(store.favorites("u1").await.unwrap().is_empty());

        remove_favorite(&store, "u1", &ContentId::from("m1"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn lists_are_per_user() {
        let store = CatalogStore::new(Arc::new(MemoryStore::new()));
        add_favorite(&store, "u1", entry("m1")).await.unwrap();
        add_favorite(&store, "u2", entry("m1")).await.unwrap();

        remove_favorite(&store, "u1", &ContentId::from("m1"))
            .await
            .unwrap();

        assert!(store.favorites("u1").await.unwrap().is_empty());
        assert_eq!(store.favorites("u2").await.unwrap().len(), 1);
    }
}
