//! Paid-subscription time arithmetic.

use chrono::{DateTime, TimeDelta, Utc};

/// A user is a subscriber while `subscribe_until` lies strictly in the future.
pub fn is_active(subscribe_until: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    subscribe_until.is_some_and(|until| until > now)
}

/// New expiry after granting `duration_secs` of subscription at `now`.
///
/// Time stacks: the grant starts from the later of `now` and the current
/// expiry, so redeeming while subscribed extends rather than overwrites.
/// Returns `None` if the duration is negative or the result overflows.
pub fn extended_until(
    subscribe_until: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    duration_secs: i64,
) -> Option<DateTime<Utc>> {
    if duration_secs < 0 {
        return None;
    }
    let base = match subscribe_until {
        Some(until) if until > now => until,
        _ => now,
    };
    base.checked_add_signed(TimeDelta::try_seconds(duration_secs)?)
}
