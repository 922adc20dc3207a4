use chrono::Utc;
use uuid::Uuid;

use swipe_domain::decision::DecisionKind;

use crate::domain::repository::{DecisionCache, DecisionRepository};
use crate::domain::types::{ActorContext, Decision};
use crate::error::MatchingServiceError;
use crate::usecase::rate_limit::RateLimiter;

// ── RecordDecision ───────────────────────────────────────────────────────────

pub struct RecordDecisionInput {
    pub target_id: Uuid,
    pub kind: DecisionKind,
}

#[derive(Debug)]
pub struct RecordDecisionOutput {
    pub kind: DecisionKind,
    /// `false` when the same edge was already stored.
    pub created: bool,
}

impl RecordDecisionOutput {
    pub fn message(&self) -> String {
        self.kind.success_message()
    }
}

pub struct RecordDecisionUseCase<D: DecisionRepository, C: DecisionCache> {
    pub decisions: D,
    pub cache: C,
}

impl<D: DecisionRepository, C: DecisionCache> RecordDecisionUseCase<D, C> {
    pub async fn execute(
        &self,
        actor: ActorContext,
        input: RecordDecisionInput,
    ) -> Result<RecordDecisionOutput, MatchingServiceError> {
        if input.target_id == actor.user_id {
            return Err(MatchingServiceError::InvalidTarget);
        }

        let limiter = RateLimiter { cache: &self.cache };
        if !limiter.is_allowed(&actor).await? {
            return Err(MatchingServiceError::RateLimitExceeded);
        }

        let decision = Decision {
            self_id: actor.user_id,
            target_id: input.target_id,
            kind: input.kind,
            created_at: Utc::now(),
        };
        let created = self.decisions.insert_if_absent(&decision).await?;

        // The durable edge is the source of truth; a missed cache write only
        // under-counts the actor's window.
        if let Err(e) = self
            .cache
            .add_decided_target(actor.user_id, input.target_id)
            .await
        {
            tracing::warn!(
                error = %e,
                actor_id = %actor.user_id,
                target_id = %input.target_id,
                kind = %input.kind,
                "failed to record decision in cache"
            );
        }

        Ok(RecordDecisionOutput {
            kind: input.kind,
            created,
        })
    }
}
