//! Shared builder for server-level tests: in-memory store, stub auth
//! provider, stub object storage.

// Each test binary compiles this module separately and uses a different
// subset of it.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use tokio::sync::Mutex;

use tela_core::auth::{AuthError, AuthProvider, NewUser};
use tela_core::providers::TmdbClient;
use tela_core::storage::{ObjectStorage, StorageError};
use tela_core::store::{CatalogStore, MemoryStore};
use tela_model::{AuthUser, UserMetadata};
use tela_server::infra::{app_state::AppState, config::Config};
use tela_server::routes::create_router;

pub const SUPER_ADMIN_EMAIL: &str = "root@tela.test";
pub const SUPER_ADMIN_ID: &str = "super-1";
pub const SUPER_ADMIN_TOKEN: &str = "token-super";

pub const ADMIN_ID: &str = "admin-1";
pub const ADMIN_TOKEN: &str = "token-admin";

pub const USER_ID: &str = "user-1";
pub const USER_TOKEN: &str = "token-user";

fn account(id: &str, email: &str, is_admin: bool) -> AuthUser {
    AuthUser {
        id: id.to_string(),
        email: email.to_string(),
        user_metadata: UserMetadata {
            name: None,
            is_admin,
            extra: serde_json::Map::new(),
        },
    }
}

/// Auth provider stub: a token table plus an account table, both mutable so
/// admin operations behave like the hosted service.
#[derive(Default)]
pub struct StubAuthProvider {
    by_token: Mutex<HashMap<String, String>>,
    by_id: Mutex<HashMap<String, AuthUser>>,
}

impl StubAuthProvider {
    pub async fn seeded() -> Self {
        let stub = Self::default();
        stub.insert(SUPER_ADMIN_TOKEN, account(SUPER_ADMIN_ID, SUPER_ADMIN_EMAIL, false))
            .await;
        stub.insert(ADMIN_TOKEN, account(ADMIN_ID, "admin@tela.test", true))
            .await;
        stub.insert(USER_TOKEN, account(USER_ID, "user@tela.test", false))
            .await;
        stub
    }

    pub async fn insert(&self, token: &str, user: AuthUser) {
        self.by_token
            .lock()
            .await
            .insert(token.to_string(), user.id.clone());
        self.by_id.lock().await.insert(user.id.clone(), user);
    }

    pub async fn user(&self, id: &str) -> Option<AuthUser> {
        self.by_id.lock().await.get(id).cloned()
    }
}

#[async_trait]
impl AuthProvider for StubAuthProvider {
    async fn get_user(&self, access_token: &str) -> Result<Option<AuthUser>, AuthError> {
        let id = self.by_token.lock().await.get(access_token).cloned();
        match id {
            Some(id) => Ok(self.by_id.lock().await.get(&id).cloned()),
            None => Ok(None),
        }
    }

    async fn get_user_by_id(&self, user_id: &str) -> Result<Option<AuthUser>, AuthError> {
        Ok(self.by_id.lock().await.get(user_id).cloned())
    }

    async fn create_user(&self, new_user: NewUser) -> Result<AuthUser, AuthError> {
        let mut by_id = self.by_id.lock().await;
        if by_id.values().any(|u| u.email == new_user.email) {
            return Err(AuthError::Rejected("email already registered".to_string()));
        }
        let user = AuthUser {
            id: uuid::Uuid::new_v4().to_string(),
            email: new_user.email,
            user_metadata: UserMetadata {
                name: new_user.name,
                is_admin: false,
                extra: serde_json::Map::new(),
            },
        };
        by_id.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn update_password(&self, user_id: &str, _new_password: &str) -> Result<(), AuthError> {
        if self.by_id.lock().await.contains_key(user_id) {
            Ok(())
        } else {
            Err(AuthError::Rejected("unknown user".to_string()))
        }
    }

    async fn set_metadata(&self, user_id: &str, metadata: &UserMetadata) -> Result<(), AuthError> {
        let mut by_id = self.by_id.lock().await;
        match by_id.get_mut(user_id) {
            Some(user) => {
                user.user_metadata = metadata.clone();
                Ok(())
            }
            None => Err(AuthError::Rejected("unknown user".to_string())),
        }
    }

    async fn delete_user(&self, user_id: &str) -> Result<(), AuthError> {
        self.by_id.lock().await.remove(user_id);
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<AuthUser>, AuthError> {
        Ok(self.by_id.lock().await.values().cloned().collect())
    }
}

/// Object storage stub recording uploads and removals.
#[derive(Debug, Default)]
pub struct StubStorage {
    pub uploads: Mutex<Vec<String>>,
    pub removals: Mutex<Vec<String>>,
}

#[async_trait]
impl ObjectStorage for StubStorage {
    async fn ensure_bucket(&self, _bucket: &str) -> Result<(), StorageError> {
        Ok(())
    }

    async fn upload(
        &self,
        bucket: &str,
        file_name: &str,
        _bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<(), StorageError> {
        self.uploads.lock().await.push(format!("{bucket}/{file_name}"));
        Ok(())
    }

    async fn create_signed_url(
        &self,
        bucket: &str,
        file_name: &str,
        _ttl_seconds: u64,
    ) -> Result<String, StorageError> {
        Ok(format!("https://storage.test/{bucket}/{file_name}?signed"))
    }

    async fn remove(&self, bucket: &str, file_name: &str) -> Result<(), StorageError> {
        self.removals
            .lock()
            .await
            .push(format!("{bucket}/{file_name}"));
        Ok(())
    }
}

fn test_config() -> Config {
    Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        redis_url: None,
        auth_url: "http://127.0.0.1:1/auth/v1/".to_string(),
        super_admin_email: SUPER_ADMIN_EMAIL.to_string(),
        storage_url: "http://127.0.0.1:1/storage/v1/".to_string(),
        slider_bucket: "slider-banners".to_string(),
        signed_url_ttl_seconds: 60,
        service_role_key: "service-key".to_string(),
        tmdb_api_key: String::new(),
        tmdb_language: "pt-BR".to_string(),
        cors_allowed_origins: Vec::new(),
    }
}

#[allow(unused)]
pub struct TestApp {
    pub server: TestServer,
    pub store: CatalogStore,
    pub auth: Arc<StubAuthProvider>,
    pub storage: Arc<StubStorage>,
}

pub async fn build_test_app() -> TestApp {
    let store = CatalogStore::new(Arc::new(MemoryStore::new()));
    let auth = Arc::new(StubAuthProvider::seeded().await);
    let storage = Arc::new(StubStorage::default());
    let tmdb = Arc::new(TmdbClient::with_base_url(
        // Nothing in these tests reaches the metadata API.
        "http://127.0.0.1:1".to_string(),
        String::new(),
        "pt-BR".to_string(),
    ));
    let config = Arc::new(test_config());

    let state = AppState::new(
        store.clone(),
        auth.clone(),
        storage.clone(),
        tmdb,
        config,
    );
    let server = TestServer::new(create_router(state)).expect("test server");

    TestApp {
        server,
        store,
        auth,
        storage,
    }
}
