//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use anteroom_core::config::AppConfig;
use anteroom_queue::{AdminService, AdmissionController};
use anteroom_store::QueueCounters;

use crate::proxy::UpstreamClient;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Per-request admission decisions.
    pub controller: Arc<AdmissionController>,
    /// Manual queue control.
    pub admin: Arc<AdminService>,
    /// Queue counters (health checks).
    pub counters: QueueCounters,
    /// Client for the protected origin.
    pub upstream: Arc<UpstreamClient>,
}
