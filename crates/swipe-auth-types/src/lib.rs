//! Auth types shared across Swipe services.
//!
//! Authentication itself happens upstream; services only consume the identity
//! header the gateway injects after a session has been verified.

pub mod identity;
