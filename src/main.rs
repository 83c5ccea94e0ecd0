//! Cinescope - movie catalog aggregation backend
//!
//! Serves merged movie metadata from an upstream catalog provider through
//! a cache-aside gateway, joined with locally stored user reviews.

mod aggregator;
mod api;
mod cache;
mod config;
mod db;
mod error;
mod models;
mod tasks;
mod upstream;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::sync::RwLock;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aggregator::Aggregator;
use api::{create_router, AppState};
use cache::CacheStore;
use config::Config;
use db::PgReviewStore;
use tasks::spawn_cleanup_task;
use upstream::{CacheGateway, UpstreamClient};

/// Main entry point for the aggregation service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the shared cache store and the upstream client
/// 4. Construct the process-wide cache gateway and hand it to the aggregator
/// 5. Open a lazy connection pool to the local store
/// 6. Start the background expiry sweep
/// 7. Start the HTTP server with graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinescope=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Cinescope aggregation service");

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: port={}, cache_max_entries={}, cache_ttl={:?}s, upstream_timeout={}s",
        config.server_port, config.cache_max_entries, config.cache_ttl, config.upstream_timeout
    );

    let cache = Arc::new(RwLock::new(CacheStore::new(config.cache_max_entries)));

    let client = UpstreamClient::new(
        config.tmdb_base_url.clone(),
        config.tmdb_api_token.clone(),
        config.upstream_timeout,
    )
    .context("failed to build the upstream HTTP client")?;

    // One gateway for the whole process, passed explicitly to the aggregator
    let gateway = Arc::new(CacheGateway::new(client, cache.clone(), config.cache_ttl));

    let reviews = PgReviewStore::connect_lazy(&config.database_url)
        .context("failed to configure the local store pool")?;

    let aggregator = Arc::new(Aggregator::new(gateway, Arc::new(reviews)));
    let state = AppState::new(aggregator, cache.clone());
    info!("Cache gateway and aggregator initialized");

    let cleanup_handle = spawn_cleanup_task(cache, config.cleanup_interval);
    info!("Background expiry sweep started");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind server port")?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the sweep task and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    cleanup_handle.abort();
    warn!("Expiry sweep task aborted");
}
