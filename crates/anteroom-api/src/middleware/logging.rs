//! Request/response logging middleware.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;
use tracing::info;

/// Admission outcome the gate attaches to its responses so the request
/// record carries it. Absent for allow-listed, admin, and health
/// requests, which never reach the admission check.
#[derive(Debug, Clone, Copy)]
pub struct AdmissionOutcome {
    /// Whether the visitor reached the origin.
    pub admitted: bool,
}

/// Logs request method, path, status, admission outcome, and duration.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();
    let permitted = response
        .extensions()
        .get::<AdmissionOutcome>()
        .map(|outcome| outcome.admitted);

    info!(
        method = %method,
        path = %uri.path(),
        status = %status.as_u16(),
        permitted = ?permitted,
        duration_ms = %duration.as_millis(),
        "HTTP request"
    );

    response
}
