use chrono::Utc;
use tracing::info;

use tela_model::{ContentId, ContentKind, SliderEntry, Title};

use crate::error::Result;
use crate::store::CatalogStore;

use super::classify::classify;
use super::home_cap::apply_home_cap;
use super::release_window::is_recent_release_now;

/// Orchestrates create/update/delete of a title across the three denormalized
/// projections: the title record, the slider list, and per-user favorites.
///
/// There is no transaction spanning the projections; every step is an
/// independent read-modify-write and a failure mid-sequence leaves a
/// partially-applied state. All steps are individually idempotent, so the
/// recovery story is "retry the whole operation".
#[derive(Debug, Clone)]
pub struct ContentLifecycleCoordinator {
    store: CatalogStore,
}

impl ContentLifecycleCoordinator {
    pub fn new(store: CatalogStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Persist a new title and fan out its bookkeeping.
    ///
    /// Assigns a generated id when the caller supplied none, derives the
    /// primary category from the genre tags when no manual categories were
    /// given, prepends the release category when the release date is inside
    /// the window, then re-applies the home cap for every resulting category.
    /// Slider inclusion is honored only when a banner is present, guarded by
    /// the one-entry-per-(id, kind) invariant so a retried create does not
    /// duplicate the entry.
    pub async fn create(&self, kind: ContentKind, mut title: Title) -> Result<ContentId> {
        let id = title.id.clone().unwrap_or_else(ContentId::generate);
        title.id = Some(id.clone());

        let now = Utc::now().timestamp_millis();

        if title.categories.is_empty() {
            title.categories.push(classify(&title.tmdb_genres, kind));
        }
        let release_category = kind.release_category();
        if is_recent_release_now(title.release_date) && !title.in_category(release_category) {
            title.categories.insert(0, release_category.to_string());
        }

        title.added_at = Some(now);
        title.show_in_home = Some(true);

        self.store.put_title(kind, &id, &title).await?;

        for category in title.categories.clone() {
            apply_home_cap(&self.store, &category, kind).await?;
        }

        if title.in_slider
            && let Some(banner) = title.banner_url.clone()
        {
            self.insert_slider_entry(&id, kind, banner, now).await?;
        }

        info!(
            target: "catalog.lifecycle",
            %id,
            %kind,
            title = %title.title,
            categories = title.categories.len(),
            "created"
        );

        Ok(id)
    }

    /// Replace a stored title wholesale and reconcile slider membership.
    ///
    /// Last writer wins; there is no merge and no concurrency check. The
    /// stored `added_at` survives the replacement regardless of what the
    /// caller sent. The home cap is deliberately not re-applied here; create
    /// is its only trigger.
    pub async fn update(&self, kind: ContentKind, id: &ContentId, mut title: Title) -> Result<()> {
        let stored = self.store.title(kind, id).await?;

        title.id = Some(id.clone());
        if let Some(added_at) = stored.as_ref().and_then(|t| t.added_at) {
            title.added_at = Some(added_at);
        }

        self.store.put_title(kind, id, &title).await?;

        let mut entries = self.store.slider().await?;
        let existing = entries.iter().position(|e| e.references(id, kind));

        if title.in_slider
            && let Some(banner) = title.banner_url.clone()
        {
            match existing {
                Some(index) => {
                    entries[index].url = banner;
                    self.store.set_slider(&entries).await?;
                }
                None => {
                    entries.push(SliderEntry {
                        url: banner,
                        file_name: None,
                        content_id: id.clone(),
                        kind,
                        created_at: Utc::now().timestamp_millis(),
                    });
                    self.store.set_slider(&entries).await?;
                }
            }
        } else if !title.in_slider
            && let Some(index) = existing
        {
            entries.remove(index);
            self.store.set_slider(&entries).await?;
        }

        info!(target: "catalog.lifecycle", %id, %kind, "updated");
        Ok(())
    }

    /// Remove a title and every reference to it.
    ///
    /// Cascades over the slider list and all users' favorites; the favorites
    /// sweep is an O(users) fan-out acceptable only because delete is an
    /// offline admin operation. Re-running a delete for an already-removed id
    /// is a no-op at every step.
    pub async fn delete(&self, kind: ContentKind, id: &ContentId) -> Result<()> {
        self.store.delete_title(kind, id).await?;

        let entries = self.store.slider().await?;
        let kept: Vec<SliderEntry> = entries
            .iter()
            .filter(|e| !e.references(id, kind))
            .cloned()
            .collect();
        if kept.len() != entries.len() {
            self.store.set_slider(&kept).await?;
        }

        for user_id in self.store.favorites_user_ids().await? {
            let favorites = self.store.favorites(&user_id).await?;
            let kept: Vec<_> = favorites
                .iter()
                .filter(|f| f.content_id != *id)
                .cloned()
                .collect();
            if kept.len() != favorites.len() {
                self.store.set_favorites(&user_id, &kept).await?;
            }
        }

        info!(target: "catalog.lifecycle", %id, %kind, "deleted");
        Ok(())
    }

    /// Sweep both namespaces, adding the release category to titles inside
    /// the recency window and stripping it from titles that aged out.
    /// Returns how many titles were rewritten.
    pub async fn refresh_release_categories(&self) -> Result<usize> {
        let mut updated = 0;

        for kind in [ContentKind::Movie, ContentKind::Series] {
            let release_category = kind.release_category();
            for mut title in self.store.titles_of(kind).await? {
                let Some(id) = title.id.clone() else {
                    continue;
                };
                let is_release = is_recent_release_now(title.release_date);
                let has_category = title.in_category(release_category);

                if is_release && !has_category {
                    title.categories.insert(0, release_category.to_string());
                } else if !is_release && has_category {
                    title.categories.retain(|c| c != release_category);
                } else {
                    continue;
                }

                self.store.put_title(kind, &id, &title).await?;
                updated += 1;
            }
        }

        if updated > 0 {
            info!(target: "catalog.lifecycle", updated, "release categories refreshed");
        }
        Ok(updated)
    }

    async fn insert_slider_entry(
        &self,
        id: &ContentId,
        kind: ContentKind,
        url: String,
        created_at: i64,
    ) -> Result<()> {
        let mut entries = self.store.slider().await?;
        if entries.iter().any(|e| e.references(id, kind)) {
            return Ok(());
        }
        entries.push(SliderEntry {
            url,
            file_name: None,
            content_id: id.clone(),
            kind,
            created_at,
        });
        self.store.set_slider(&entries).await?;
        info!(target: "catalog.slider", %id, %kind, "slider entry added");
        Ok(())
    }
}
