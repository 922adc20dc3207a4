use chrono::Utc;
use uuid::Uuid;

use swipe_domain::subscription::is_active;

use crate::domain::repository::UserRepository;
use crate::domain::types::{ActorContext, User};
use crate::error::MatchingServiceError;

// ── ResolveActor ─────────────────────────────────────────────────────────────

/// Turns an authenticated user id into an [`ActorContext`], reading the
/// subscription flag from the user row at request time.
pub struct ResolveActorUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ResolveActorUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<ActorContext, MatchingServiceError> {
        let user = self
            .repo
            .find_by_id(user_id)
            .await?
            .ok_or(MatchingServiceError::UserNotFound)?;
        Ok(ActorContext {
            user_id: user.id,
            is_subscriber: is_active(user.subscribe_until, Utc::now()),
        })
    }
}

// ── GetMe ────────────────────────────────────────────────────────────────────

pub struct GetMeUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> GetMeUseCase<R> {
    pub async fn execute(&self, user_id: Uuid) -> Result<User, MatchingServiceError> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(MatchingServiceError::UserNotFound)
    }
}
