use std::{fmt, sync::Arc};

use tela_core::auth::{AdminPolicy, AuthProvider};
use tela_core::providers::TmdbClient;
use tela_core::storage::ObjectStorage;
use tela_core::{CatalogStore, ContentLifecycleCoordinator};

use crate::infra::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub store: CatalogStore,
    pub catalog: ContentLifecycleCoordinator,
    pub auth: Arc<dyn AuthProvider>,
    pub storage: Arc<dyn ObjectStorage>,
    pub tmdb: Arc<TmdbClient>,
    pub admin_policy: AdminPolicy,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(
        store: CatalogStore,
        auth: Arc<dyn AuthProvider>,
        storage: Arc<dyn ObjectStorage>,
        tmdb: Arc<TmdbClient>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            catalog: ContentLifecycleCoordinator::new(store.clone()),
            admin_policy: AdminPolicy::new(config.super_admin_email.clone()),
            store,
            auth,
            storage,
            tmdb,
            config,
        }
    }
}
