use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::SubscriptionLedger;
use crate::domain::types::Redemption;
use crate::error::MatchingServiceError;

// ── RedeemCoupon ─────────────────────────────────────────────────────────────

pub struct RedeemCouponUseCase<S: SubscriptionLedger> {
    pub ledger: S,
}

impl<S: SubscriptionLedger> RedeemCouponUseCase<S> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        coupon_code: &str,
    ) -> Result<Redemption, MatchingServiceError> {
        let code = coupon_code.trim();
        if code.is_empty() {
            return Err(MatchingServiceError::InvalidRequest(
                "coupon_code must not be empty".to_owned(),
            ));
        }

        let redemption = self
            .ledger
            .redeem(user_id, code, Utc::now())
            .await?
            .ok_or(MatchingServiceError::CouponNotApplicable)?;

        tracing::info!(
            user_id = %user_id,
            coupon_id = %redemption.coupon_id,
            subscribe_until = %redemption.subscribe_until,
            "coupon redeemed"
        );
        Ok(redemption)
    }
}
