//! # anteroom-core
//!
//! Shared foundations for Anteroom: configuration schemas and loading,
//! the unified [`error::AppError`] type, and the [`traits::CounterBackend`]
//! abstraction over the external atomic counter store.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use config::AppConfig;
pub use error::{AppError, ErrorKind};
pub use result::AppResult;
