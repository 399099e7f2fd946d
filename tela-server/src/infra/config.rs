use std::env;

/// Server configuration loaded via environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Server settings
    pub server_host: String,
    pub server_port: u16,

    // Key-value store settings; unset falls back to an ephemeral in-memory
    // store, which is only useful for development.
    pub redis_url: Option<String>,

    // Hosted auth provider
    pub auth_url: String,
    pub super_admin_email: String,

    // Hosted object storage
    pub storage_url: String,
    pub slider_bucket: String,
    pub signed_url_ttl_seconds: u64,

    /// Service-role key shared by the auth and storage APIs. Never sent to
    /// clients.
    pub service_role_key: String,

    // Metadata API
    pub tmdb_api_key: String,
    pub tmdb_language: String,

    // CORS settings
    pub cors_allowed_origins: Vec<String>,
}

// Uploaded banners stay addressable for a year before the link expires.
const DEFAULT_SIGNED_URL_TTL: u64 = 31_536_000;

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Ok(Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),

            redis_url: env::var("REDIS_URL").ok(),

            auth_url: env::var("AUTH_URL")
                .unwrap_or_else(|_| "http://localhost:9999/auth/v1/".to_string()),
            super_admin_email: env::var("SUPER_ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@tela.app".to_string()),

            storage_url: env::var("STORAGE_URL")
                .unwrap_or_else(|_| "http://localhost:9998/storage/v1/".to_string()),
            slider_bucket: env::var("SLIDER_BUCKET")
                .unwrap_or_else(|_| "slider-banners".to_string()),
            signed_url_ttl_seconds: env::var("SIGNED_URL_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SIGNED_URL_TTL),

            service_role_key: env::var("SERVICE_ROLE_KEY").unwrap_or_default(),

            tmdb_api_key: env::var("TMDB_API_KEY").unwrap_or_default(),
            tmdb_language: env::var("TMDB_LANGUAGE").unwrap_or_else(|_| "pt-BR".to_string()),

            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| {
                    "http://localhost:3000,http://localhost:5173".to_string()
                })
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        })
    }
}
