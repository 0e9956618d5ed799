//! Health check handler.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Counter store status.
    pub store: String,
    /// Server version.
    pub version: String,
}

/// GET /healthz
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let store_ok = matches!(state.counters.health_check().await, Ok(true));

    Json(HealthResponse {
        status: if store_ok { "ok" } else { "degraded" }.to_string(),
        store: if store_ok { "connected" } else { "unreachable" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
