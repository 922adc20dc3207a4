use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use swipe_domain::decision::DecisionKind;
use swipe_domain::geo::Coordinates;

/// Non-subscribers may record this many decisions per rolling window.
pub const MAX_DAILY_DECISIONS: u64 = 10;

/// Lifetime of a decision window, counted from its first decision.
pub const DECISION_WINDOW_SECS: i64 = 86_400;

/// Candidates farther than this from the actor are never recommended.
pub const RECOMMENDATION_RADIUS_METERS: f64 = 150_000.0;

pub const COUPON_CODE_MIN_LEN: usize = 5;

// ── User ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub birth_date: NaiveDate,
    pub subscribe_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// The authenticated caller, resolved once per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorContext {
    pub user_id: Uuid,
    pub is_subscriber: bool,
}

// ── Decision ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub self_id: Uuid,
    pub target_id: Uuid,
    pub kind: DecisionKind,
    pub created_at: DateTime<Utc>,
}

// ── Location ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub user_id: Uuid,
    pub coordinates: Coordinates,
    pub updated_at: DateTime<Utc>,
}

// ── Recommendation ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub user_id: Uuid,
    pub birth_date: NaiveDate,
    pub distance_meters: f64,
    pub location_updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CandidateQuery {
    pub actor_id: Uuid,
    pub origin: Coordinates,
    pub radius_meters: f64,
    pub limit: u32,
}

// ── Coupon ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coupon {
    pub id: Uuid,
    pub code: String,
    pub duration_secs: i64,
    pub valid_until: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// A coupon assigned to a user, unused until `used_at` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponRedemption {
    pub id: Uuid,
    pub user_id: Uuid,
    pub coupon_id: Uuid,
    pub used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Result of a successful ledger redemption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redemption {
    pub redemption_id: Uuid,
    pub coupon_id: Uuid,
    pub subscribe_until: DateTime<Utc>,
    pub used_at: DateTime<Utc>,
}

/// Coupon codes are ASCII alphanumeric and at least [`COUPON_CODE_MIN_LEN`] long.
pub fn validate_coupon_code(code: &str) -> Result<(), &'static str> {
    if code.len() < COUPON_CODE_MIN_LEN {
        return Err("code must be at least 5 characters");
    }
    if !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err("code must be alphanumeric");
    }
    Ok(())
}
