//! HTTP Basic Auth for the admin interface.
//!
//! The expected credential is the username `admin` and the configured
//! password. When no password is configured the middleware passes
//! everything through — the reference deployment allows disabling auth,
//! though that lets anybody who can reach the path skip the queue.

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use anteroom_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// Middleware that rejects admin requests without the configured
/// Basic Auth credential. A failure maps to a 401 challenge via the
/// `AppError` response mapping.
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(expected_password) = state.config.admin.password.clone() else {
        return Ok(next.run(request).await);
    };

    let presented = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Basic "))
        .and_then(|encoded| BASE64.decode(encoded).ok())
        .and_then(|decoded| String::from_utf8(decoded).ok());

    match presented {
        Some(credential) if credential == format!("admin:{expected_password}") => {
            Ok(next.run(request).await)
        }
        _ => Err(AppError::admin_auth("Admin credentials required").into()),
    }
}
