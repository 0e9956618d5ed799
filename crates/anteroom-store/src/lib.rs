//! # anteroom-store
//!
//! Counter store implementations for Anteroom. Supports two modes:
//!
//! - **memory**: In-process counters using [dashmap](https://crates.io/crates/dashmap),
//!   for tests and single-node development
//! - **redis**: Redis-backed counters using the [redis](https://crates.io/crates/redis) crate
//!
//! The provider is selected at runtime based on configuration. On top of
//! the raw backend sits [`QueueCounters`], the domain wrapper exposing
//! the cursor, length, and auto-period operations the admission
//! controller works with.

pub mod counters;
pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use counters::QueueCounters;
pub use provider::StoreManager;
