//! Application builder — wires counters, codec, controller, and proxy
//! into an Axum app and runs the server.

use std::sync::Arc;

use axum::Router;

use anteroom_core::config::AppConfig;
use anteroom_core::error::AppError;
use anteroom_queue::{AdminService, AdmissionController};
use anteroom_store::{QueueCounters, StoreManager};
use anteroom_token::{TokenIssuer, TokenVerifier};

use crate::proxy::UpstreamClient;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Construct the application state from configuration and a counter
/// store.
pub fn build_state(config: AppConfig, store: StoreManager) -> Result<AppState, AppError> {
    let counters = QueueCounters::new(Arc::new(store));
    let issuer = TokenIssuer::new(&config.auth.token_secret);
    let verifier = TokenVerifier::new(&config.auth.token_secret);

    let controller = Arc::new(AdmissionController::new(
        counters.clone(),
        issuer,
        verifier,
        config.queue.clone(),
    ));
    let admin = Arc::new(AdminService::new(counters.clone()));
    let upstream = Arc::new(UpstreamClient::new(&config.upstream)?);

    Ok(AppState {
        config: Arc::new(config),
        controller,
        admin,
        counters,
        upstream,
    })
}

/// Runs the Anteroom server with the given configuration.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Anteroom server...");

    tracing::info!(
        "Initializing counter store (provider: {})...",
        config.store.provider
    );
    let store = StoreManager::new(&config.store).await?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = build_state(config, store)?;

    if state.config.admin.enabled() && state.config.admin.password.is_none() {
        tracing::warn!("Admin interface is enabled without a password");
    }

    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Anteroom server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
}
