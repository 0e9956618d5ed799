//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. Tuning values are validated once at load time so that bad
//! quantities fail the process at startup rather than per request.

pub mod admin;
pub mod auth;
pub mod logging;
pub mod queue;
pub mod server;
pub mod store;
pub mod upstream;

use serde::{Deserialize, Serialize};

use self::admin::AdminConfig;
use self::auth::AuthConfig;
use self::logging::LoggingConfig;
use self::queue::QueueConfig;
use self::server::ServerConfig;
use self::store::StoreConfig;
use self::upstream::UpstreamConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Protected origin settings.
    pub upstream: UpstreamConfig,
    /// Counter store settings.
    pub store: StoreConfig,
    /// Queue tuning parameters.
    pub queue: QueueConfig,
    /// Admin interface settings.
    #[serde(default)]
    pub admin: AdminConfig,
    /// Credential signing settings.
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `ANTEROOM__`, then validates
    /// the queue tuning values.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("ANTEROOM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate tuning values that would otherwise fail per request.
    pub fn validate(&self) -> Result<(), AppError> {
        self.queue.validate()?;
        if self.auth.token_secret.is_empty() {
            return Err(AppError::configuration("auth.token_secret must not be empty"));
        }
        if self.upstream.base_url.is_empty() {
            return Err(AppError::configuration("upstream.base_url must not be empty"));
        }
        if let Some(path) = &self.admin.path {
            if !path.starts_with('/') {
                return Err(AppError::configuration(format!(
                    "admin.path must start with '/': '{path}'"
                )));
            }
            // The router rejects "/" and trailing slashes when nesting.
            if path.ends_with('/') {
                return Err(AppError::configuration(format!(
                    "admin.path must be a non-root path without a trailing slash: '{path}'"
                )));
            }
        }
        Ok(())
    }
}
