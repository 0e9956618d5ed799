//! # anteroom-api
//!
//! HTTP layer for Anteroom built on Axum.
//!
//! Provides the catch-all queue gate (allow-list passthrough, admission
//! check, origin proxying, queue page), the optional admin interface,
//! middleware (Basic Auth, request logging), cookie helpers, and error
//! mapping.

pub mod app;
pub mod cookie;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod proxy;
pub mod router;
pub mod state;
pub mod views;

pub use app::{build_app, build_state, run_server};
pub use state::AppState;
