//! Claims structure embedded in every visitor token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Claims payload of a visitor's queue credential.
///
/// `position` is assigned once, when the visitor first joins the queue,
/// and is immutable thereafter: a token is never mutated, only wholly
/// replaced. Admission is recomputed fresh on every request from the
/// global cursor, so there is no "admitted" claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueClaims {
    /// The visitor's place in the global arrival order.
    pub position: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl QueueClaims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}
