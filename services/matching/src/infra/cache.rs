use deadpool_redis::redis::{self, AsyncCommands};
use deadpool_redis::{Connection, Pool};
use uuid::Uuid;

use crate::domain::repository::DecisionCache;
use crate::domain::types::DECISION_WINDOW_SECS;
use crate::error::MatchingServiceError;

#[derive(Clone)]
pub struct RedisDecisionCache {
    pub pool: Pool,
}

fn decided_targets_key(actor_id: Uuid) -> String {
    format!("action-{actor_id}")
}

async fn connection(pool: &Pool) -> Result<Connection, MatchingServiceError> {
    pool.get()
        .await
        .map_err(|e| MatchingServiceError::Cache(e.into()))
}

impl DecisionCache for RedisDecisionCache {
    async fn decided_count(&self, actor_id: Uuid) -> Result<u64, MatchingServiceError> {
        let mut conn = connection(&self.pool).await?;
        // SCARD of a missing or expired key is 0.
        let count: u64 = conn
            .scard(decided_targets_key(actor_id))
            .await
            .map_err(|e: redis::RedisError| MatchingServiceError::Cache(e.into()))?;
        Ok(count)
    }

    async fn add_decided_target(
        &self,
        actor_id: Uuid,
        target_id: Uuid,
    ) -> Result<(), MatchingServiceError> {
        let mut conn = connection(&self.pool).await?;
        let key = decided_targets_key(actor_id);

        // EXPIRE NX only arms the TTL when the key has none, so the window is
        // anchored at its first decision and later additions never extend it.
        let mut pipe = redis::pipe();
        pipe.atomic()
            .sadd(&key, target_id.to_string())
            .ignore()
            .cmd("EXPIRE")
            .arg(&key)
            .arg(DECISION_WINDOW_SECS)
            .arg("NX")
            .ignore();
        let (): () = pipe
            .query_async(&mut conn)
            .await
            .map_err(|e: redis::RedisError| MatchingServiceError::Cache(e.into()))?;
        Ok(())
    }
}

/// `PING` through the pool, for readiness probes.
pub async fn ping(pool: &Pool) -> bool {
    let Ok(mut conn) = pool.get().await else {
        return false;
    };
    let pong: Result<String, _> = redis::cmd("PING").query_async(&mut conn).await;
    pong.is_ok()
}
