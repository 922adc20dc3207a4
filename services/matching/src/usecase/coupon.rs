use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::repository::CouponRepository;
use crate::domain::types::{Coupon, CouponRedemption, validate_coupon_code};
use crate::error::MatchingServiceError;

// ── CreateCoupon ─────────────────────────────────────────────────────────────

pub struct CreateCouponInput {
    pub code: String,
    pub duration_secs: i64,
    /// Unix seconds.
    pub valid_until: i64,
}

pub struct CreateCouponUseCase<R: CouponRepository> {
    pub repo: R,
}

impl<R: CouponRepository> CreateCouponUseCase<R> {
    pub async fn execute(&self, input: CreateCouponInput) -> Result<Coupon, MatchingServiceError> {
        validate_coupon_code(&input.code).map_err(MatchingServiceError::InvalidCoupon)?;
        if input.duration_secs < 0 {
            return Err(MatchingServiceError::InvalidCoupon(
                "duration must not be negative",
            ));
        }
        let valid_until = u64::try_from(input.valid_until)
            .ok()
            .and_then(|_| DateTime::from_timestamp(input.valid_until, 0))
            .ok_or(MatchingServiceError::InvalidCoupon(
                "valid_until must be a unix timestamp",
            ))?;

        let coupon = Coupon {
            id: Uuid::now_v7(),
            code: input.code,
            duration_secs: input.duration_secs,
            valid_until,
            created_at: Utc::now(),
        };
        self.repo.create(&coupon).await?;
        Ok(coupon)
    }
}

// ── AssignCoupon ─────────────────────────────────────────────────────────────

/// Hands a coupon to a user as an unused redemption. Expiry is enforced here
/// only; an assigned coupon stays redeemable after `valid_until`.
pub struct AssignCouponUseCase<R: CouponRepository> {
    pub repo: R,
}

impl<R: CouponRepository> AssignCouponUseCase<R> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        code: &str,
    ) -> Result<CouponRedemption, MatchingServiceError> {
        let coupon = self
            .repo
            .find_by_code(code)
            .await?
            .ok_or(MatchingServiceError::CouponNotFound)?;

        let now = Utc::now();
        if now > coupon.valid_until {
            return Err(MatchingServiceError::CouponExpired);
        }

        let redemption = CouponRedemption {
            id: Uuid::now_v7(),
            user_id,
            coupon_id: coupon.id,
            used_at: None,
            created_at: now,
        };
        self.repo.assign(&redemption).await?;
        Ok(redemption)
    }
}
