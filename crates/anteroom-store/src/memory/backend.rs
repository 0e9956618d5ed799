//! In-memory counter backend using the dashmap crate.
//!
//! Intended for tests and single-node development. Per-key atomicity
//! comes from holding the dashmap entry guard across the read-modify-
//! write; no two callers ever observe the same post-increment value.
//! TTLs are not tracked — auto-period keys simply accumulate for the
//! lifetime of the process, which is acceptable outside production.

use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;

use anteroom_core::result::AppResult;
use anteroom_core::traits::counters::CounterBackend;

/// In-memory counter backend.
#[derive(Debug, Default)]
pub struct MemoryCounterBackend {
    /// Counter values keyed by name.
    counters: DashMap<String, i64>,
}

impl MemoryCounterBackend {
    /// Create a new empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CounterBackend for MemoryCounterBackend {
    async fn get(&self, key: &str) -> AppResult<Option<i64>> {
        Ok(self.counters.get(key).map(|v| *v))
    }

    async fn incr_by(&self, key: &str, amount: i64) -> AppResult<i64> {
        let mut entry = self.counters.entry(key.to_string()).or_insert(0);
        *entry += amount;
        Ok(*entry)
    }

    async fn expire(&self, key: &str, _ttl: Duration) -> AppResult<bool> {
        Ok(self.counters.contains_key(key))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
