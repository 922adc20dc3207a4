use crate::domain::repository::DecisionCache;
use crate::domain::types::{ActorContext, MAX_DAILY_DECISIONS};
use crate::error::MatchingServiceError;

/// Daily decision quota for non-subscribers.
///
/// Subscribers are always allowed and never touch the cache. Everyone else is
/// allowed while their live window holds fewer than [`MAX_DAILY_DECISIONS`]
/// distinct targets. The check and the later cache write are not atomic, so
/// concurrent requests from one actor may overshoot the quota slightly.
pub struct RateLimiter<'a, C: DecisionCache> {
    pub cache: &'a C,
}

impl<C: DecisionCache> RateLimiter<'_, C> {
    pub async fn is_allowed(&self, actor: &ActorContext) -> Result<bool, MatchingServiceError> {
        if actor.is_subscriber {
            return Ok(true);
        }
        let count = self.cache.decided_count(actor.user_id).await?;
        Ok(count < MAX_DAILY_DECISIONS)
    }
}
