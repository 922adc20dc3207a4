pub mod coupon;
pub mod decision;
pub mod health;
pub mod location;
pub mod recommendation;
pub mod subscription;
pub mod user;

use axum::extract::rejection::JsonRejection;
use serde::Serialize;

use crate::error::MatchingServiceError;

/// Plain confirmation body shared by write endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<JsonRejection> for MatchingServiceError {
    fn from(rejection: JsonRejection) -> Self {
        MatchingServiceError::InvalidRequest(rejection.body_text())
    }
}
