//! Manual queue control, bypassing the automatic-window logic.

use tracing::info;

use anteroom_core::result::AppResult;
use anteroom_store::QueueCounters;

/// Privileged operations for operators of the waiting room.
///
/// Access control (the Basic Auth challenge) lives at the HTTP layer;
/// this service assumes the caller is already authorized.
#[derive(Debug, Clone)]
pub struct AdminService {
    /// Shared queue counters.
    counters: QueueCounters,
}

impl AdminService {
    /// Create a new admin service.
    pub fn new(counters: QueueCounters) -> Self {
        Self { counters }
    }

    /// Manually let in `quantity` visitors. Returns the new cursor.
    pub async fn force_admit(&self, quantity: i64) -> AppResult<i64> {
        let new_cursor = self.counters.advance_cursor(quantity).await?;
        info!(quantity, new_cursor, "manually advanced cursor");
        Ok(new_cursor)
    }

    /// Number of visitors still waiting, for display.
    ///
    /// Length and cursor are read without a joint snapshot, so the raw
    /// subtraction can transiently go negative; it is clamped and never
    /// presented below zero.
    pub async fn backlog(&self) -> AppResult<i64> {
        let length = self.counters.length().await?;
        let cursor = self.counters.cursor().await?;
        Ok((length - cursor).max(0))
    }
}
