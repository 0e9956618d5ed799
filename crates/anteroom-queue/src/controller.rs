//! Per-request admission decisions.
//!
//! The controller is stateless between requests: every decision is
//! recomputed from the visitor's token and the shared counters. A
//! visitor is admitted exactly when the global cursor has caught up to
//! their position; "admitted" is never stored anywhere.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use anteroom_core::config::queue::QueueConfig;
use anteroom_core::result::AppResult;
use anteroom_store::QueueCounters;
use anteroom_token::{InvalidReason, TokenIssuer, TokenOutcome, TokenVerifier};

/// The outcome of one admission check, computed fresh per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionDecision {
    /// Whether the visitor may pass to the protected origin.
    pub admitted: bool,
    /// The visitor's queue position (existing or freshly assigned).
    pub position: i64,
    /// Visitors strictly ahead of this one still waiting. Present only
    /// when denied, and never negative.
    pub rank: Option<i64>,
    /// Freshly issued credential to set on the response, if the visitor
    /// arrived without a usable one.
    pub new_token: Option<String>,
}

/// Decides, per request, whether a visitor may pass.
#[derive(Debug, Clone)]
pub struct AdmissionController {
    /// Shared queue counters.
    counters: QueueCounters,
    /// Credential issuer.
    issuer: TokenIssuer,
    /// Credential verifier.
    verifier: TokenVerifier,
    /// Queue tuning parameters.
    config: QueueConfig,
}

impl AdmissionController {
    /// Create a new controller.
    pub fn new(
        counters: QueueCounters,
        issuer: TokenIssuer,
        verifier: TokenVerifier,
        config: QueueConfig,
    ) -> Self {
        Self {
            counters,
            issuer,
            verifier,
            config,
        }
    }

    /// Decide admission for a request carrying `raw_token` (if any).
    pub async fn decide(&self, raw_token: Option<&str>) -> AppResult<AdmissionDecision> {
        self.decide_at(raw_token, Utc::now()).await
    }

    /// Decide admission as of the given instant.
    ///
    /// Counter store failures propagate: this never degrades into a
    /// default admit or deny.
    pub async fn decide_at(
        &self,
        raw_token: Option<&str>,
        now: DateTime<Utc>,
    ) -> AppResult<AdmissionDecision> {
        // Resolve the visitor's position. Any unusable token — missing,
        // malformed, forged, expired — re-queues them as a new arrival
        // at the current tail.
        let (position, new_token) = match self.verifier.verify(raw_token) {
            TokenOutcome::Valid { position, .. } => {
                debug!(position, "validated token for queue position");
                (position, None)
            }
            TokenOutcome::Invalid(reason) => {
                if reason != InvalidReason::Missing {
                    debug!(reason = %reason, "discarding unusable token");
                }
                let position = self.counters.join(self.config.arrival_block_size).await?;
                let expires_at =
                    now + chrono::Duration::seconds(self.config.cookie_expiry_seconds as i64);
                let token = self.issuer.issue(position, expires_at)?;
                info!(position, "issued token for queue position");
                (position, Some(token))
            }
        };

        let mut cursor = self.counters.cursor().await?;
        let mut permitted = cursor >= position;

        if !permitted && self.config.automatic_interval_seconds > 0 {
            if let Some(advanced) = self.try_automatic_advance(cursor, now).await? {
                cursor = advanced;
                permitted = position < cursor;
            }
        }

        let rank = if permitted {
            None
        } else {
            Some((position - cursor - 1).max(0))
        };

        Ok(AdmissionDecision {
            admitted: permitted,
            position,
            rank,
            new_token,
        })
    }

    /// Advance the cursor if this request is the first to observe the
    /// current time window.
    ///
    /// The period counter is a best-effort substitute for leader
    /// election, not a lock: out of concurrent requests in one window,
    /// exactly one observes count 1 and performs the advancement; the
    /// rest proceed against the pre-advancement cursor and a visitor
    /// they queue is admitted on their next request. Under windows
    /// racing in quick succession more than `automatic_quantity`
    /// visitors may collectively be admitted; that bound is deliberately
    /// best-effort.
    async fn try_automatic_advance(
        &self,
        cursor: i64,
        now: DateTime<Utc>,
    ) -> AppResult<Option<i64>> {
        let interval_ms = self.config.automatic_interval_seconds * 1000;
        let window = now.timestamp_millis().max(0) as u64 / interval_ms;

        // Twice the interval so a window key outlives its own window,
        // then ages out of the store.
        let ttl = Duration::from_secs(self.config.automatic_interval_seconds * 2);
        let period_count = self.counters.bump_auto_period(window, ttl).await?;
        if period_count != 1 {
            return Ok(None);
        }

        let length = self.counters.length().await?;
        if cursor < length + self.config.automatic_quantity {
            let new_cursor = self
                .counters
                .advance_cursor(self.config.automatic_quantity)
                .await?;
            info!(window, new_cursor, "advanced cursor automatically");
            return Ok(Some(new_cursor));
        }

        Ok(None)
    }
}
