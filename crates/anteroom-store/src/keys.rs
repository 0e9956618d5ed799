//! Counter key builders for all Anteroom store entries.
//!
//! Centralising key construction prevents typos and makes it easy
//! to find every key the application uses.

/// Key for the queue cursor: how many visitors have been let in.
pub fn cursor() -> String {
    "queue:cursor".to_string()
}

/// Key for the queue length: how many visitors have ever been assigned
/// a position.
pub fn length() -> String {
    "queue:length".to_string()
}

/// Key for the per-window automatic advancement counter.
///
/// `window` is the time bucket index, `now_ms / (interval_s * 1000)`.
/// Counters for distinct windows are independent; stale windows age out
/// via a TTL set by the store, never by explicit pruning.
pub fn auto_period(window: u64) -> String {
    format!("queue:auto:{window}")
}
