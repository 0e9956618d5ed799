//! Maps domain `AppError` to HTTP responses.
//!
//! Store failures surface as 5xx so operators see outages — they are
//! never mapped to an admit or deny. Credential failures never reach
//! this mapping at all: the admission controller absorbs them and
//! re-queues the visitor.

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use anteroom_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Wrapper over [`AppError`] so the HTTP response mapping can live in
/// this crate (both `IntoResponse` and `AppError` are foreign types).
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let Self(error) = self;
        let (status, error_code) = match &error.kind {
            ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ErrorKind::AdminAuth => (StatusCode::UNAUTHORIZED, "ADMIN_AUTH"),
            ErrorKind::StoreUnavailable => {
                tracing::error!(error = %error.message, "Counter store unavailable");
                (StatusCode::SERVICE_UNAVAILABLE, "STORE_UNAVAILABLE")
            }
            ErrorKind::Upstream => {
                tracing::error!(error = %error.message, "Upstream request failed");
                (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR")
            }
            ErrorKind::Credential
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::Internal => {
                tracing::error!(error = %error.message, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message: error.message.clone(),
        };

        let mut response = (status, Json(body)).into_response();
        if error.kind == ErrorKind::AdminAuth {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                header::HeaderValue::from_static("Basic realm=\"anteroom admin\""),
            );
        }
        response
    }
}
