//! Protected origin configuration.

use serde::{Deserialize, Serialize};

/// Settings for the origin serving the protected content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the protected origin, e.g. `"http://origin:9000"`.
    pub base_url: String,
    /// Request timeout towards the origin in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Paths served from the origin regardless of the visitor's queue
    /// state (robots.txt, favicons, shared assets).
    #[serde(default)]
    pub allowed_paths: Vec<String>,
    /// `Cache-Control` max-age applied to allow-listed responses that
    /// arrive without one, in seconds.
    #[serde(default = "default_asset_max_age")]
    pub asset_cache_max_age_seconds: u64,
}

fn default_timeout() -> u64 {
    30
}

fn default_asset_max_age() -> u64 {
    21600
}
