//! Application builder: wires stores, services, and router into a running server.

use std::future::IntoFuture;
use std::time::Duration;

use axum::Router;
use tokio::sync::watch;
use tracing::{info, warn};

use signdesk_core::config::AppConfig;
use signdesk_core::error::AppError;
use signdesk_store::StoreManager;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application over freshly initialized stores.
pub async fn build_app(config: AppConfig) -> Result<Router, AppError> {
    info!("Initializing store (provider: {})...", config.store.provider);
    let stores = StoreManager::new(&config.store).await?;

    let state = AppState::new(config, &stores);
    Ok(build_router(state))
}

/// Runs the SignDesk server until Ctrl+C or SIGTERM.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    info!("Starting SignDesk server...");

    // ── Step 1: Create upload directory ──────────────────────────
    tokio::fs::create_dir_all(&config.upload.directory)
        .await
        .map_err(|e| {
            AppError::internal(format!(
                "Failed to create upload dir '{}': {e}",
                config.upload.directory
            ))
        })?;

    // ── Step 2: Stores, services, router ─────────────────────────
    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let app = build_app(config).await?;

    // ── Step 3: Bind and serve ───────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("SignDesk server listening on {}", addr);

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    tokio::select! {
        result = server.into_future() => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
        }
        _ = async {
            let _ = shutdown_rx.wait_for(|stopping| *stopping).await;
            tokio::time::sleep(grace).await;
        } => {
            warn!(grace_seconds = grace.as_secs(), "Shutdown grace period elapsed; closing open connections");
        }
    }

    info!("SignDesk server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
