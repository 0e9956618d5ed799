//! In-process counter store.

pub mod backend;

pub use backend::MemoryCounterBackend;
