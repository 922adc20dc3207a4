//! Domain types shared across Swipe services.
//!
//! Pure types and arithmetic with no framework, store or cache dependencies.
//! Any service layer may use them; they never reach out to I/O themselves.

pub mod decision;
pub mod geo;
pub mod subscription;
