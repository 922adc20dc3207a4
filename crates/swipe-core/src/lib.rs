//! Service plumbing shared by Swipe services: configuration, health probes,
//! request middleware, tracing setup and serde helpers.

pub mod config;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
