//! # anteroom-token
//!
//! The visitor credential codec. A visitor's entire queue state lives in
//! a signed HS256 token carried in their cookie: the assigned position
//! and an expiry. Nothing is stored server-side per visitor.
//!
//! Verification failures are values ([`TokenOutcome::Invalid`]), never
//! errors — an adversarial or stale cookie simply re-queues the visitor
//! as new.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::QueueClaims;
pub use decoder::{InvalidReason, TokenOutcome, TokenVerifier};
pub use encoder::TokenIssuer;
