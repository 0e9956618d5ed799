//! Integration test harness.

mod helpers;

mod admin_test;
mod gate_test;
