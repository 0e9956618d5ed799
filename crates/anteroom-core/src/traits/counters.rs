//! Counter backend trait for pluggable atomic-counter stores.

use std::time::Duration;

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for counter store backends (Redis or in-memory).
///
/// Every key holds a single integer. The backend must guarantee that
/// `incr_by` on one key is linearizable with respect to other `incr_by`
/// calls on that same key: no two concurrent callers ever observe the
/// same post-increment value. There is no cross-key atomicity — callers
/// must not assume a consistent joint snapshot of two keys.
///
/// Counters are only ever mutated through `incr_by`, never overwritten;
/// this is what preserves the monotonicity of the queue cursor and
/// length under concurrent writers.
#[async_trait]
pub trait CounterBackend: Send + Sync + std::fmt::Debug + 'static {
    /// Get the current value of a counter. Returns `None` if the key
    /// does not exist.
    async fn get(&self, key: &str) -> AppResult<Option<i64>>;

    /// Atomically add `amount` to a counter, creating it at 0 first if
    /// absent. Returns the new value.
    async fn incr_by(&self, key: &str, amount: i64) -> AppResult<i64>;

    /// Set the TTL on an existing key. Returns `false` if the key does
    /// not exist or the backend does not support expiry.
    async fn expire(&self, key: &str, ttl: Duration) -> AppResult<bool>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
