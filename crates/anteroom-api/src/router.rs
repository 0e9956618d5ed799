//! Route definitions for the Anteroom HTTP surface.
//!
//! Three route groups: the health endpoint, the optional admin
//! interface nested at its configured path, and the gate as the
//! fallback claiming every other request.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::new().route("/healthz", get(handlers::health::health));

    if let Some(admin_path) = state.config.admin.path.clone() {
        router = router.nest(&admin_path, admin_routes(state.clone()));
    }

    router
        .fallback(handlers::gate::gate)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Backlog display, manual release, and self cookie clearing — all
/// behind the Basic Auth middleware.
fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::admin::status))
        .route("/permit", post(handlers::admin::permit))
        .route(
            "/clear_self",
            get(handlers::admin::clear_self).post(handlers::admin::clear_self),
        )
        .layer(axum_middleware::from_fn_with_state(
            state,
            middleware::admin_auth::require_admin,
        ))
}
