//! Unified application error types for Anteroom.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. Note that a malformed or expired
//! visitor credential is deliberately NOT an error anywhere in this
//! taxonomy: the token verifier reports it as a value
//! (`TokenOutcome::Invalid`) and the admission controller re-queues the
//! visitor. Only trusted-infrastructure failures travel as `AppError`.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// A credential operation failed on the server side (signing, never
    /// verification — verification failures are values, not errors).
    Credential,
    /// The counter store is unreachable or returned an error. Fatal for
    /// the current request; never mapped to an admit or deny decision.
    StoreUnavailable,
    /// The protected origin could not be reached or errored.
    Upstream,
    /// Input validation failed.
    Validation,
    /// A configuration error occurred. Surfaced at startup, not per request.
    Configuration,
    /// Admin authentication failed (bad or missing Basic Auth credential).
    AdminAuth,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal server error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credential => write!(f, "CREDENTIAL"),
            Self::StoreUnavailable => write!(f, "STORE_UNAVAILABLE"),
            Self::Upstream => write!(f, "UPSTREAM"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::AdminAuth => write!(f, "ADMIN_AUTH"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout Anteroom.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. This provides a single error type for
/// the entire application boundary.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a credential error.
    pub fn credential(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Credential, message)
    }

    /// Create a store-unavailable error.
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::StoreUnavailable, message)
    }

    /// Create an upstream error.
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Upstream, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an admin-authentication error.
    pub fn admin_auth(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AdminAuth, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
