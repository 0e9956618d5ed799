//! Shared trait definitions.

pub mod counters;

pub use counters::CounterBackend;
