//! Queue tuning configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Queue tuning parameters.
///
/// Defaults follow the reference deployment: refresh every 5 seconds,
/// remember a visitor for 24 hours, let in 5 visitors every 15 seconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueConfig {
    /// How often the queue page asks the visitor's browser to refresh,
    /// in seconds.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_seconds: u64,
    /// How long to remember a given visitor. After this time a visitor
    /// loses their position and starts queuing again.
    #[serde(default = "default_cookie_expiry")]
    pub cookie_expiry_seconds: u64,
    /// How often to let visitors in automatically, in seconds.
    /// Set to 0 to disable automatic queue advancement; visitors are
    /// then only admitted via the admin interface.
    #[serde(default = "default_automatic_interval")]
    pub automatic_interval_seconds: u64,
    /// How many visitors to let in per automatic advancement.
    #[serde(default = "default_automatic_quantity")]
    pub automatic_quantity: i64,
    /// How many queue positions a new arrival consumes. Anything above 1
    /// inserts synthetic placeholder arrivals ahead of the visitor, for
    /// demonstrating queue depth. Production deployments must use 1.
    #[serde(default = "default_arrival_block_size")]
    pub arrival_block_size: i64,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            refresh_interval_seconds: default_refresh_interval(),
            cookie_expiry_seconds: default_cookie_expiry(),
            automatic_interval_seconds: default_automatic_interval(),
            automatic_quantity: default_automatic_quantity(),
            arrival_block_size: default_arrival_block_size(),
        }
    }
}

impl QueueConfig {
    /// Reject tuning values that would corrupt the counters at runtime.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.automatic_quantity < 1 {
            return Err(AppError::configuration(format!(
                "queue.automatic_quantity must be >= 1, got {}",
                self.automatic_quantity
            )));
        }
        if self.arrival_block_size < 1 {
            return Err(AppError::configuration(format!(
                "queue.arrival_block_size must be >= 1, got {}",
                self.arrival_block_size
            )));
        }
        if self.cookie_expiry_seconds == 0 {
            return Err(AppError::configuration(
                "queue.cookie_expiry_seconds must be > 0",
            ));
        }
        Ok(())
    }
}

fn default_refresh_interval() -> u64 {
    5
}

fn default_cookie_expiry() -> u64 {
    24 * 60 * 60
}

fn default_automatic_interval() -> u64 {
    15
}

fn default_automatic_quantity() -> i64 {
    5
}

fn default_arrival_block_size() -> i64 {
    1
}
