//! # Tela Server
//!
//! Backend for the Tela streaming catalog.
//!
//! ## Overview
//!
//! - **Content CRUD**: movies and series stored as JSON in a hosted key-value
//!   store, with automatic categorization and home-feed capping
//! - **Favorites & slider**: denormalized projections kept consistent by the
//!   lifecycle coordinator
//! - **User administration**: delegated to the hosted auth provider
//! - **Metadata proxy**: authenticated pass-through to the movie-metadata API
//!
//! ## Architecture
//!
//! The server is built on Axum and uses:
//! - Redis as the hosted key-value backend (in-memory fallback for dev)
//! - A hosted auth provider for accounts and sessions
//! - Hosted object storage for uploaded banner images

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::http::HeaderValue;
use clap::Parser;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use tela_core::auth::HostedAuthClient;
use tela_core::providers::TmdbClient;
use tela_core::storage::{HostedBucketClient, ObjectStorage};
use tela_core::store::{CatalogStore, KeyValueStore, MemoryStore, RedisStore};

use tela_server::infra::{app_state::AppState, config::Config};
use tela_server::routes;

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "tela-server")]
#[command(about = "Streaming catalog backend with content curation and user administration")]
struct Cli {
    /// Server port (overrides config)
    #[arg(short, long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long, env = "SERVER_HOST")]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                // Override via RUST_LOG.
                .unwrap_or_else(|_| "info,tower_http=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env()?;
    if let Some(port) = cli.port {
        config.server_port = port;
    }
    if let Some(host) = cli.host {
        config.server_host = host;
    }
    let config = Arc::new(config);

    let store_backend: Arc<dyn KeyValueStore> = match &config.redis_url {
        Some(url) => {
            let store = RedisStore::connect(url)
                .await
                .context("connecting to the key-value store")?;
            info!("connected to redis key-value store");
            Arc::new(store)
        }
        None => {
            warn!("REDIS_URL not set; falling back to an ephemeral in-memory store");
            Arc::new(MemoryStore::new())
        }
    };
    let store = CatalogStore::new(store_backend);

    let auth_url = Url::parse(&config.auth_url).context("parsing AUTH_URL")?;
    let storage_url = Url::parse(&config.storage_url).context("parsing STORAGE_URL")?;

    let auth = Arc::new(HostedAuthClient::new(
        auth_url,
        config.service_role_key.clone(),
    ));
    let storage: Arc<dyn ObjectStorage> = Arc::new(HostedBucketClient::new(
        storage_url,
        config.service_role_key.clone(),
    ));
    let tmdb = Arc::new(TmdbClient::new(
        config.tmdb_api_key.clone(),
        config.tmdb_language.clone(),
    ));

    // Make sure the banner bucket exists; a cold storage service at boot is
    // not fatal, uploads will surface the error again.
    if let Err(err) = storage.ensure_bucket(&config.slider_bucket).await {
        warn!(%err, bucket = %config.slider_bucket, "could not ensure slider bucket");
    }

    let state = AppState::new(store, auth, storage, tmdb, config.clone());

    let app = routes::create_router(state)
        .layer(build_cors_layer(&config))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.server_host, config.server_port)
        .parse()
        .context("parsing listen address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    info!(%addr, "tela-server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(%err, "failed to install shutdown signal handler");
    }
}
