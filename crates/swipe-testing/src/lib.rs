//! Test utilities for Swipe services.
//!
//! Import from `[dev-dependencies]` only; never in production code.

pub mod auth;
