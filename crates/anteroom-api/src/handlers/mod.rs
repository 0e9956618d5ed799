//! HTTP request handlers.

pub mod admin;
pub mod gate;
pub mod health;
