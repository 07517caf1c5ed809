//! Roster Server
//!
//! Serves the employee/category admin API backed by MySQL.

use anyhow::{Context, Result};
use roster_server::services::ImageStore;
use roster_server::settings::{Settings, StoreBackend};
use roster_server::storage::{Database, MemoryStore, Store};
use roster_server::{router, AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        let payload = if let Some(s) = info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };
        eprintln!("[PANIC] at {:?}: {}", location, payload);
        tracing::error!("PANIC at {:?}: {}", location, payload);
    }));

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Roster Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let settings = Settings::load().context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, store={:?}, static_dir={}",
        settings.bind_address(),
        settings.store,
        settings.static_dir.display()
    );

    let store = open_store(&settings).await?;

    let images = ImageStore::new(settings.images_dir());
    images.ensure_dir().await?;
    info!("Images directory: {}", images.dir().display());

    let state = AppState::new(store.clone(), images);
    let app = router(state, &settings)?;

    let addr: SocketAddr = settings
        .bind_address()
        .parse()
        .context("Failed to parse bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("Server is running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shutting down...");
    store.close().await;

    Ok(())
}

async fn open_store(settings: &Settings) -> Result<Arc<dyn Store>> {
    match settings.store {
        StoreBackend::Mysql => {
            let db = Database::connect(settings)
                .await
                .context("Error connecting to the database")?;
            Ok(Arc::new(db))
        }
        StoreBackend::Memory => {
            warn!("Using in-memory store; data is lost on exit");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => info!("Received SIGINT"),
                    _ = sigterm.recv() => info!("Received SIGTERM"),
                }
            }
            Err(e) => {
                warn!("Failed to register SIGTERM handler: {}", e);
                ctrl_c.await.ok();
                info!("Received SIGINT");
            }
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received SIGINT");
    }
}
