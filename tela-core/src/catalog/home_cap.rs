use tracing::debug;

use tela_model::ContentKind;

use crate::error::Result;
use crate::store::CatalogStore;

/// Maximum number of titles per category on the home screen.
pub const HOME_VISIBLE_LIMIT: usize = 10;

/// Enforce the per-category home cap by hiding the oldest excess titles.
///
/// Scans the kind's namespace, keeps titles in `category` that are not
/// already hidden, orders them newest-first by `added_at` (missing sorts as
/// 0, i.e. oldest) with id as a stable tie-break, and persists
/// `showInHome=false` for everything past the limit. Idempotent; a stable
/// set is untouched on re-run. Not transactional: concurrent writers on the
/// same category race under last-write-wins, which is accepted.
pub async fn apply_home_cap(store: &CatalogStore, category: &str, kind: ContentKind) -> Result<()> {
    let mut visible: Vec<_> = store
        .titles_of(kind)
        .await?
        .into_iter()
        .filter(|t| t.in_category(category) && t.shown_in_home())
        .collect();

    visible.sort_by(|a, b| {
        let newest_first = b.added_at.unwrap_or(0).cmp(&a.added_at.unwrap_or(0));
        newest_first.then_with(|| b.id.cmp(&a.id))
    });

    for mut title in visible.into_iter().skip(HOME_VISIBLE_LIMIT) {
        let Some(id) = title.id.clone() else {
            continue;
        };
        title.show_in_home = Some(false);
        store.put_title(kind, &id, &title).await?;
        debug!(target: "catalog.home", %id, %kind, category, "hidden from home feed");
    }

    Ok(())
}
