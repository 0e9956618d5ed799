//! HTTP middleware.

pub mod admin_auth;
pub mod logging;
