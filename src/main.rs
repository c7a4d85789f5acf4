use anyhow::Context;
use restaurant_reviews::{router, AppConfig, AppState, ReviewStore};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("🚀 Starting Restaurant Reviews Server");

    // Load configuration
    let config = AppConfig::load()?;
    info!("📋 Configuration loaded");
    info!("   - Snapshot: {:?}", config.storage.snapshot_path);
    info!("   - Autosave: {}", config.storage.autosave);
    info!("   - Server: {}:{}", config.server.host, config.server.port);

    // Restore reviews from the last snapshot
    let snapshot_path = config.storage.snapshot_path.clone();
    let mut store = ReviewStore::new();
    store
        .load_snapshot(&snapshot_path)
        .with_context(|| format!("Failed to load snapshot {:?}", snapshot_path))?;
    info!("✅ Review store ready ({} reviews)", store.len());
    if !store.is_empty() {
        info!("   - Cuisine categories are not kept in snapshots and start empty");
    }

    let autosave_path = config.storage.autosave.then(|| snapshot_path.clone());
    let state = AppState::new(store, autosave_path);
    let store = state.store.clone(); // Kept for the shutdown save

    let app = router(state);

    // Start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("🌐 Server listening on http://{}", addr);
    info!("");
    info!("📡 Available endpoints:");
    info!("   GET  /health                       - Health check");
    info!("   POST /add_review                   - Add new review");
    info!("   GET  /get_reviews?cuisine_type=... - Reviews by cuisine");
    info!("   GET  /restaurants/{{name}}/reviews   - Reviews and average for a restaurant");
    info!("   GET  /cuisines                     - Known cuisine categories");
    info!("");
    info!("✨ Server is ready to accept requests!");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if config.storage.save_on_shutdown {
        info!("💾 Saving reviews before shutdown...");
        match store.read().await.save_snapshot(&snapshot_path) {
            Ok(()) => info!("✅ Reviews saved successfully"),
            Err(e) => warn!("⚠️  Failed to save reviews: {}", e),
        }
    }

    info!("👋 Server shutting down gracefully");

    Ok(())
}

/// Graceful shutdown handler
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}
