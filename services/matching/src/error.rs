use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use swipe_domain::geo::InvalidCoordinates;

/// Matching service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum MatchingServiceError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("cannot decide on yourself")]
    InvalidTarget,
    #[error("limit must be a positive integer")]
    InvalidLimit,
    #[error("invalid location: {0}")]
    InvalidLocation(#[from] InvalidCoordinates),
    #[error("invalid coupon: {0}")]
    InvalidCoupon(&'static str),
    #[error("coupon expired")]
    CouponExpired,
    #[error("exceed max action allowed")]
    RateLimitExceeded,
    #[error("user not found")]
    UserNotFound,
    #[error("target user not found")]
    TargetNotFound,
    #[error("location not found")]
    LocationNotFound,
    #[error("coupon not found")]
    CouponNotFound,
    #[error("coupon not found or already applied")]
    CouponNotApplicable,
    #[error("coupon already exists")]
    CouponAlreadyExists,
    #[error("coupon already assigned to user")]
    CouponAlreadyAssigned,
    #[error("cache failure: {0:#}")]
    Cache(anyhow::Error),
    #[error("internal error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl MatchingServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::InvalidTarget => "INVALID_TARGET",
            Self::InvalidLimit => "INVALID_LIMIT",
            Self::InvalidLocation(_) => "INVALID_LOCATION",
            Self::InvalidCoupon(_) => "INVALID_COUPON",
            Self::CouponExpired => "COUPON_EXPIRED",
            Self::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::TargetNotFound => "TARGET_NOT_FOUND",
            Self::LocationNotFound => "LOCATION_NOT_FOUND",
            Self::CouponNotFound => "COUPON_NOT_FOUND",
            Self::CouponNotApplicable => "COUPON_NOT_APPLICABLE",
            Self::CouponAlreadyExists => "COUPON_ALREADY_EXISTS",
            Self::CouponAlreadyAssigned => "COUPON_ALREADY_ASSIGNED",
            Self::Cache(_) => "CACHE",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_)
            | Self::InvalidTarget
            | Self::InvalidLimit
            | Self::InvalidLocation(_)
            | Self::InvalidCoupon(_)
            | Self::CouponExpired
            | Self::RateLimitExceeded => StatusCode::BAD_REQUEST,
            Self::UserNotFound
            | Self::TargetNotFound
            | Self::LocationNotFound
            | Self::CouponNotFound
            | Self::CouponNotApplicable => StatusCode::NOT_FOUND,
            Self::CouponAlreadyExists | Self::CouponAlreadyAssigned => StatusCode::CONFLICT,
            Self::Cache(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for MatchingServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::Internal(e) => {
                tracing::error!(
                    error = %format!("{e:#}"),
                    kind = "INTERNAL",
                    "internal error"
                );
            }
            Self::Cache(e) => {
                tracing::error!(
                    error = %format!("{e:#}"),
                    kind = "CACHE",
                    "cache failure"
                );
            }
            _ => {}
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
