//! Hosted object storage seam for uploaded banner images.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage rejected the request: {0}")]
    Rejected(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected storage response: {0}")]
    Parse(String),
}

/// Contract over the hosted object-storage service.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Create the bucket if it does not exist yet. Safe to call on every
    /// startup.
    async fn ensure_bucket(&self, bucket: &str) -> Result<(), StorageError>;

    async fn upload(
        &self,
        bucket: &str,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError>;

    /// A URL clients can fetch the object from for `ttl_seconds`.
    async fn create_signed_url(
        &self,
        bucket: &str,
        file_name: &str,
        ttl_seconds: u64,
    ) -> Result<String, StorageError>;

    async fn remove(&self, bucket: &str, file_name: &str) -> Result<(), StorageError>;
}

/// Client for the hosted storage REST API, authenticated with the service
/// key.
pub struct HostedBucketClient {
    http: reqwest::Client,
    base_url: Url,
    service_key: String,
}

impl std::fmt::Debug for HostedBucketClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostedBucketClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Deserialize)]
struct SignedUrlResponse {
    #[serde(rename = "signedURL")]
    signed_url: String,
}

impl HostedBucketClient {
    pub fn new(base_url: Url, service_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            service_key,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, StorageError> {
        self.base_url
            .join(path)
            .map_err(|e| StorageError::Parse(e.to_string()))
    }

    async fn rejection(response: reqwest::Response) -> StorageError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        StorageError::Rejected(format!("{status}: {body}"))
    }
}

#[async_trait]
impl ObjectStorage for HostedBucketClient {
    async fn ensure_bucket(&self, bucket: &str) -> Result<(), StorageError> {
        let response = self
            .http
            .post(self.endpoint("bucket")?)
            .bearer_auth(&self.service_key)
            .json(&json!({ "name": bucket, "public": false }))
            .send()
            .await?;

        match response.status() {
            // Already exists is the steady state after the first boot.
            StatusCode::CONFLICT => Ok(()),
            s if s.is_success() => Ok(()),
            _ => Err(Self::rejection(response).await),
        }
    }

    async fn upload(
        &self,
        bucket: &str,
        file_name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let response = self
            .http
            .post(self.endpoint(&format!("object/{bucket}/{file_name}"))?)
            .bearer_auth(&self.service_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }

    async fn create_signed_url(
        &self,
        bucket: &str,
        file_name: &str,
        ttl_seconds: u64,
    ) -> Result<String, StorageError> {
        let response = self
            .http
            .post(self.endpoint(&format!("object/sign/{bucket}/{file_name}"))?)
            .bearer_auth(&self.service_key)
            .json(&json!({ "expiresIn": ttl_seconds }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        let signed: SignedUrlResponse = response.json().await?;

        // The service answers with a path relative to its own origin.
        self.base_url
            .join(signed.signed_url.trim_start_matches('/'))
            .map(String::from)
            .map_err(|e| StorageError::Parse(e.to_string()))
    }

    async fn remove(&self, bucket: &str, file_name: &str) -> Result<(), StorageError> {
        let response = self
            .http
            .delete(self.endpoint(&format!("object/{bucket}/{file_name}"))?)
            .bearer_auth(&self.service_key)
            .send()
            .await?;

        match response.status() {
            // Deleting a missing object is not an error for our callers.
            StatusCode::NOT_FOUND => Ok(()),
            s if s.is_success() => Ok(()),
            _ => Err(Self::rejection(response).await),
        }
    }
}
