//! # anteroom-queue
//!
//! The admission control core: given a visitor's (optional) credential
//! and the shared queue counters, decide whether the visitor passes,
//! assign positions to new arrivals, and advance the cursor — either
//! automatically in time-windowed batches or manually through the
//! admin override service.

pub mod admin;
pub mod controller;

pub use admin::AdminService;
pub use controller::{AdmissionController, AdmissionDecision};
