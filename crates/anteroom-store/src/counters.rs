//! Domain wrapper over the raw counter backend.
//!
//! Exposes the three queue counters by name: the cursor (visitors let
//! in so far), the length (visitors ever assigned a position), and the
//! per-window automatic advancement counters. Both cursor and length
//! are only ever mutated via atomic increment, preserving the
//! `length >= cursor` invariant under concurrent writers; reading the
//! two together is not transactional and callers must tolerate
//! point-in-time skew.

use std::sync::Arc;
use std::time::Duration;

use anteroom_core::error::AppError;
use anteroom_core::result::AppResult;
use anteroom_core::traits::counters::CounterBackend;

use crate::keys;

/// The queue's shared counters, the only durable state in the system.
#[derive(Debug, Clone)]
pub struct QueueCounters {
    /// Backing counter store.
    store: Arc<dyn CounterBackend>,
}

impl QueueCounters {
    /// Create a new wrapper over a counter backend.
    pub fn new(store: Arc<dyn CounterBackend>) -> Self {
        Self { store }
    }

    /// Current queue cursor: how many visitors have been let in.
    /// An absent key means nobody has been admitted yet.
    pub async fn cursor(&self) -> AppResult<i64> {
        Ok(self.store.get(&keys::cursor()).await?.unwrap_or(0))
    }

    /// Atomically advance the cursor, letting in `amount` visitors.
    /// Returns the new cursor value.
    pub async fn advance_cursor(&self, amount: i64) -> AppResult<i64> {
        if amount < 1 {
            return Err(AppError::validation(format!(
                "cursor advancement must be >= 1, got {amount}"
            )));
        }
        self.store.incr_by(&keys::cursor(), amount).await
    }

    /// Current queue length: how many visitors have ever been assigned a
    /// position. An absent key means nobody has joined yet; after the
    /// first join the key exists, so a missing key cannot silently stand
    /// in for a store outage (outages surface as errors from the backend).
    pub async fn length(&self) -> AppResult<i64> {
        Ok(self.store.get(&keys::length()).await?.unwrap_or(0))
    }

    /// Add a visitor to the queue, reserving `block` positions. The
    /// returned new length is the visitor's assigned position (the
    /// last position of the reserved block when `block > 1`).
    pub async fn join(&self, block: i64) -> AppResult<i64> {
        if block < 1 {
            return Err(AppError::validation(format!(
                "arrival block size must be >= 1, got {block}"
            )));
        }
        self.store.incr_by(&keys::length(), block).await
    }

    /// Count a request against the given automatic advancement window
    /// and return the new count. The window key carries a TTL so stale
    /// windows age out of the store on their own.
    pub async fn bump_auto_period(&self, window: u64, ttl: Duration) -> AppResult<i64> {
        let key = keys::auto_period(window);
        let count = self.store.incr_by(&key, 1).await?;
        if count == 1 {
            // Only the creator sets the TTL; losing this race is harmless.
            self.store.expire(&key, ttl).await?;
        }
        Ok(count)
    }

    /// Check that the backing store is reachable.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.store.health_check().await
    }
}
