use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use url::Url;

use tela_model::{AuthUser, UserMetadata};

use super::{AuthError, AuthProvider, NewUser};

/// Client for the hosted auth provider's REST API.
///
/// Session lookups send the user's own bearer token; every admin operation
/// authenticates with the service key, which never leaves the server.
pub struct HostedAuthClient {
    http: reqwest::Client,
    base_url: Url,
    service_key: String,
}

impl std::fmt::Debug for HostedAuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostedAuthClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct UserPage {
    users: Vec<AuthUser>,
}

impl HostedAuthClient {
    pub fn new(base_url: Url, service_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            service_key,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, AuthError> {
        self.base_url
            .join(path)
            .map_err(|e| AuthError::Parse(e.to_string()))
    }

    async fn rejection(response: reqwest::Response) -> AuthError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        AuthError::Rejected(format!("{status}: {body}"))
    }
}

#[async_trait]
impl AuthProvider for HostedAuthClient {
    async fn get_user(&self, access_token: &str) -> Result<Option<AuthUser>, AuthError> {
        let response = self
            .http
            .get(self.endpoint("user")?)
            .bearer_auth(access_token)
            .header("apikey", &self.service_key)
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::NOT_FOUND => Ok(None),
            s if s.is_success() => Ok(Some(response.json().await?)),
            _ => Err(Self::rejection(response).await),
        }
    }

    async fn get_user_by_id(&self, user_id: &str) -> Result<Option<AuthUser>, AuthError> {
        let response = self
            .http
            .get(self.endpoint(&format!("admin/users/{user_id}"))?)
            .bearer_auth(&self.service_key)
            .send()
            .await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            s if s.is_success() => Ok(Some(response.json().await?)),
            _ => Err(Self::rejection(response).await),
        }
    }

    async fn create_user(&self, new_user: NewUser) -> Result<AuthUser, AuthError> {
        let response = self
            .http
            .post(self.endpoint("admin/users")?)
            .bearer_auth(&self.service_key)
            .json(&json!({
                "email": new_user.email,
                "password": new_user.password,
                "user_metadata": { "name": new_user.name },
                // No mail server is configured; accounts are usable at once.
                "email_confirm": true,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(response.json().await?)
    }

    async fn update_password(&self, user_id: &str, new_password: &str) -> Result<(), AuthError> {
        let response = self
            .http
            .put(self.endpoint(&format!("admin/users/{user_id}"))?)
            .bearer_auth(&self.service_key)
            .json(&json!({ "password": new_password }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }

    async fn set_metadata(&self, user_id: &str, metadata: &UserMetadata) -> Result<(), AuthError> {
        let response = self
            .http
            .put(self.endpoint(&format!("admin/users/{user_id}"))?)
            .bearer_auth(&self.service_key)
            .json(&json!({ "user_metadata": metadata }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }

    async fn delete_user(&self, user_id: &str) -> Result<(), AuthError> {
        let response = self
            .http
            .delete(self.endpoint(&format!("admin/users/{user_id}"))?)
            .bearer_auth(&self.service_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<AuthUser>, AuthError> {
        let response = self
            .http
            .get(self.endpoint("admin/users")?)
            .bearer_auth(&self.service_key)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        let page: UserPage = response.json().await?;
        Ok(page.users)
    }
}
