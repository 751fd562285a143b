//! Mini Memcache - A lightweight in-memory key-value cache server
//!
//! Serves the cache over HTTP as a set of remote procedures, with per-key
//! TTL expiration and atomic numeric counters.

use tokio::signal;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mini_memcache::api::{create_router, AppState};
use mini_memcache::cache::CacheStore;
use mini_memcache::config::Config;

/// Main entry point for the Mini Memcache server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the (empty) cache store and shutdown channel
/// 4. Create Axum router with all procedures
/// 5. Start HTTP server on the configured address
/// 6. Shut down gracefully on SIGINT/SIGTERM or a quit request
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mini_memcache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Mini Memcache server");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: host={}, port={}",
        config.host, config.server_port
    );

    // The cache is empty on every process start; the quit procedure signals
    // shutdown through this channel.
    let (shutdown_tx, shutdown_rx) = mpsc::channel(1);
    let state = AppState::new(CacheStore::new(), shutdown_tx);
    info!("Cache store initialized");

    // Create router with all procedures
    let app = create_router(state);

    // Bind to the configured address
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown; in-flight responses complete
    // before the loop exits.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_rx))
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for a shutdown trigger: Ctrl+C, SIGTERM, or the quit procedure.
async fn shutdown_signal(mut quit: mpsc::Receiver<()>) {
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
        _ = quit.recv() => {
            info!("Received quit request, initiating shutdown...");
        }
    }
}
