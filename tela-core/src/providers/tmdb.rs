use reqwest::StatusCode;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Not found")]
    NotFound,

    #[error("Rate limited")]
    RateLimited,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

const TMDB_API_BASE: &str = "https://api.themoviedb.org/3";

/// Read-only client for the movie-metadata API.
///
/// Responses are passed through as raw JSON; the admin UI consumes them
/// directly, so there is nothing to gain from typing them here. The API key
/// stays server-side; clients only ever see the proxied payloads.
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl std::fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbClient")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl TmdbClient {
    pub fn new(api_key: String, language: String) -> Self {
        Self::with_base_url(TMDB_API_BASE.to_string(), api_key, language)
    }

    /// Point the client at a different host, for tests.
    pub fn with_base_url(base_url: String, api_key: String, language: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
            language,
        }
    }

    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, ProviderError> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("language", self.language.as_str()),
            ])
            .query(query)
            .send()
            .await?;

        match response.status() {
            StatusCode::UNAUTHORIZED => Err(ProviderError::InvalidApiKey),
            StatusCode::NOT_FOUND => Err(ProviderError::NotFound),
            StatusCode::TOO_MANY_REQUESTS => Err(ProviderError::RateLimited),
            s if s.is_success() => Ok(response.json().await?),
            s => {
                let body = response.text().await.unwrap_or_default();
                Err(ProviderError::Api(format!("{s}: {body}")))
            }
        }
    }

    pub async fn search_movie(&self, query: &str) -> Result<Value, ProviderError> {
        self.get_json("/search/movie", &[("query", query)]).await
    }

    pub async fn search_tv(&self, query: &str) -> Result<Value, ProviderError> {
        self.get_json("/search/tv", &[("query", query)]).await
    }

    pub async fn movie(&self, id: &str) -> Result<Value, ProviderError> {
        self.get_json(&format!("/movie/{id}"), &[]).await
    }

    pub async fn tv(&self, id: &str) -> Result<Value, ProviderError> {
        self.get_json(&format!("/tv/{id}"), &[]).await
    }

    pub async fn season(&self, tv_id: &str, season_number: u32) -> Result<Value, ProviderError> {
        self.get_json(&format!("/tv/{tv_id}/season/{season_number}"), &[])
            .await
    }
}
