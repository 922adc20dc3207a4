use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use swipe_auth_types::identity::IdentityHeaders;

use crate::error::MatchingServiceError;
use crate::state::AppState;
use crate::usecase::subscription::RedeemCouponUseCase;

#[derive(Deserialize)]
pub struct SubscribeRequest {
    pub coupon_code: String,
}

#[derive(Serialize)]
pub struct SubscribeResponse {
    pub message: &'static str,
    #[serde(serialize_with = "swipe_core::serde::to_rfc3339_ms")]
    pub subscribe_until: DateTime<Utc>,
}

// ── POST /users/@me/subscription ─────────────────────────────────────────────

pub async fn subscribe(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    body: Result<Json<SubscribeRequest>, JsonRejection>,
) -> Result<Json<SubscribeResponse>, MatchingServiceError> {
    let Json(body) = body?;
    let uc = RedeemCouponUseCase {
        ledger: state.subscription_ledger(),
    };
    let redemption = uc.execute(identity.user_id, &body.coupon_code).await?;
    Ok(Json(SubscribeResponse {
        message: "success record subscription",
        subscribe_until: redemption.subscribe_until,
    }))
}
