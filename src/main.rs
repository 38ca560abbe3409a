//! Advocate Directory - cached listing service for advocate profiles

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use advocate_directory::api::{create_router, AppState};
use advocate_directory::cache::MemoryCache;
use advocate_directory::store::{seed, MemoryRecordStore};
use advocate_directory::{spawn_cleanup_task, Config};

/// Main entry point for the advocate listing server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Load the advocate record set
/// 4. Create the listing cache and start its TTL cleanup task
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "advocate_directory=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting advocate directory server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, cache_ttl={}s, cache_max_entries={}, cleanup_interval={}s, store_timeout={}ms",
        config.server_port,
        config.cache_ttl,
        config.cache_max_entries,
        config.cleanup_interval,
        config.store_timeout_ms
    );

    let records = match &config.seed_file {
        Some(path) => seed::load_from_file(path)?,
        None => seed::advocates(),
    };
    let store = MemoryRecordStore::new(records);
    info!("Record store loaded with {} advocates", store.len());

    let cache = MemoryCache::new(config.cache_max_entries);
    let cleanup_handle = spawn_cleanup_task(
        cache.clone(),
        Duration::from_secs(config.cleanup_interval.max(1)),
    );
    info!("Background cleanup task started");

    let state = AppState::from_config(&config, Arc::new(store), cache);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cleanup task and allows graceful shutdown.
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
    warn!("Cleanup task aborted");
}
