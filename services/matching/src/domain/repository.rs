#![allow(async_fn_in_trait)]

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::types::{
    Candidate, CandidateQuery, Coupon, CouponRedemption, Decision, Location, Redemption, User,
};
use crate::error::MatchingServiceError;

/// Repository for user profiles.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, MatchingServiceError>;
}

/// Durable like/pass edges.
pub trait DecisionRepository: Send + Sync {
    /// Insert the edge unless it already exists. Returns `true` if a row was written.
    ///
    /// Fails with `TargetNotFound` when the target user does not exist.
    async fn insert_if_absent(&self, decision: &Decision) -> Result<bool, MatchingServiceError>;
}

/// Per-actor set of targets decided on within the current window.
pub trait DecisionCache: Send + Sync {
    /// Number of distinct targets in the actor's live window (0 if none).
    async fn decided_count(&self, actor_id: Uuid) -> Result<u64, MatchingServiceError>;

    /// Add `target_id` to the actor's window, starting the window if absent.
    /// Never extends the lifetime of a live window.
    async fn add_decided_target(
        &self,
        actor_id: Uuid,
        target_id: Uuid,
    ) -> Result<(), MatchingServiceError>;
}

/// Latest known position per user.
pub trait LocationRepository: Send + Sync {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Location>, MatchingServiceError>;

    /// Insert or replace the user's location.
    async fn upsert(&self, location: &Location) -> Result<(), MatchingServiceError>;
}

pub trait RecommendationRepository: Send + Sync {
    /// Candidates within `query.radius_meters` of `query.origin`, excluding the
    /// actor and anyone the actor liked or passed, most recently located first.
    async fn find_candidates(
        &self,
        query: &CandidateQuery,
    ) -> Result<Vec<Candidate>, MatchingServiceError>;
}

/// Coupon redemption against a user's subscription expiry.
pub trait SubscriptionLedger: Send + Sync {
    /// Atomically consume the user's unused redemption of `code` and extend
    /// their subscription by the coupon's duration.
    ///
    /// Returns `None` if no unused redemption exists; in that case nothing changed.
    async fn redeem(
        &self,
        user_id: Uuid,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Redemption>, MatchingServiceError>;
}

/// Coupon catalogue and per-user assignment.
pub trait CouponRepository: Send + Sync {
    /// Fails with `CouponAlreadyExists` on a duplicate code.
    async fn create(&self, coupon: &Coupon) -> Result<(), MatchingServiceError>;

    async fn find_by_code(&self, code: &str) -> Result<Option<Coupon>, MatchingServiceError>;

    /// Fails with `CouponAlreadyAssigned` if the user already holds this coupon
    /// and with `UserNotFound` if the user does not exist.
    async fn assign(&self, redemption: &CouponRedemption) -> Result<(), MatchingServiceError>;
}
