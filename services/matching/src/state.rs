use std::time::Duration;

use deadpool_redis::Pool;
use sea_orm::DatabaseConnection;

use crate::infra::cache::RedisDecisionCache;
use crate::infra::db::{
    DbCouponRepository, DbDecisionRepository, DbLocationRepository, DbRecommendationRepository,
    DbSubscriptionLedger, DbUserRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub redis: Pool,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn decision_repo(&self) -> DbDecisionRepository {
        DbDecisionRepository {
            db: self.db.clone(),
        }
    }

    pub fn decision_cache(&self) -> RedisDecisionCache {
        RedisDecisionCache {
            pool: self.redis.clone(),
        }
    }

    pub fn location_repo(&self) -> DbLocationRepository {
        DbLocationRepository {
            db: self.db.clone(),
        }
    }

    pub fn recommendation_repo(&self) -> DbRecommendationRepository {
        DbRecommendationRepository {
            db: self.db.clone(),
        }
    }

    pub fn subscription_ledger(&self) -> DbSubscriptionLedger {
        DbSubscriptionLedger {
            db: self.db.clone(),
        }
    }

    pub fn coupon_repo(&self) -> DbCouponRepository {
        DbCouponRepository {
            db: self.db.clone(),
        }
    }
}
