use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::MatchingServiceError;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::coupon::{AssignCouponUseCase, CreateCouponInput, CreateCouponUseCase};

#[derive(Deserialize)]
pub struct CreateCouponRequest {
    pub code: String,
    pub duration_in_second: i64,
    /// Unix seconds.
    pub valid_until: i64,
}

#[derive(Deserialize)]
pub struct ApplyCouponRequest {
    pub code: String,
    pub user_id: Uuid,
}

// ── POST /coupons ────────────────────────────────────────────────────────────

pub async fn create_coupon(
    State(state): State<AppState>,
    body: Result<Json<CreateCouponRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), MatchingServiceError> {
    let Json(body) = body?;
    let uc = CreateCouponUseCase {
        repo: state.coupon_repo(),
    };
    uc.execute(CreateCouponInput {
        code: body.code,
        duration_secs: body.duration_in_second,
        valid_until: body.valid_until,
    })
    .await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("success create coupon")),
    ))
}

// ── POST /coupons/apply ──────────────────────────────────────────────────────

pub async fn apply_coupon(
    State(state): State<AppState>,
    body: Result<Json<ApplyCouponRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), MatchingServiceError> {
    let Json(body) = body?;
    let uc = AssignCouponUseCase {
        repo: state.coupon_repo(),
    };
    uc.execute(body.user_id, &body.code).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("success apply coupon")),
    ))
}
