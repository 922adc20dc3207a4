use anyhow::Context as _;
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, FromQueryResult, QueryFilter, SqlErr, Statement, TransactionError,
    TransactionTrait,
    sea_query::{Expr, OnConflict},
};
use uuid::Uuid;

use swipe_domain::decision::DecisionKind;
use swipe_domain::geo::Coordinates;
use swipe_domain::subscription::extended_until;
use swipe_matching_schema::{coupon_redemptions, coupons, likes, locations, passes, users};

use crate::domain::repository::{
    CouponRepository, DecisionRepository, LocationRepository, RecommendationRepository,
    SubscriptionLedger, UserRepository,
};
use crate::domain::types::{
    Candidate, CandidateQuery, Coupon, CouponRedemption, Decision, Location, Redemption, User,
};
use crate::error::MatchingServiceError;

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, MatchingServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        birth_date: model.birth_date,
        subscribe_until: model.subscribe_until,
        created_at: model.created_at,
    }
}

// ── Decision repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbDecisionRepository {
    pub db: DatabaseConnection,
}

impl DecisionRepository for DbDecisionRepository {
    async fn insert_if_absent(&self, decision: &Decision) -> Result<bool, MatchingServiceError> {
        let result = match decision.kind {
            DecisionKind::Like => {
                likes::Entity::insert(likes::ActiveModel {
                    self_id: Set(decision.self_id),
                    target_id: Set(decision.target_id),
                    created_at: Set(decision.created_at),
                })
                .on_conflict(
                    OnConflict::columns([likes::Column::SelfId, likes::Column::TargetId])
                        .do_nothing()
                        .to_owned(),
                )
                .exec_without_returning(&self.db)
                .await
            }
            DecisionKind::Pass => {
                passes::Entity::insert(passes::ActiveModel {
                    self_id: Set(decision.self_id),
                    target_id: Set(decision.target_id),
                    created_at: Set(decision.created_at),
                })
                .on_conflict(
                    OnConflict::columns([passes::Column::SelfId, passes::Column::TargetId])
                        .do_nothing()
                        .to_owned(),
                )
                .exec_without_returning(&self.db)
                .await
            }
        };

        match result {
            Ok(rows) => Ok(rows > 0),
            Err(DbErr::RecordNotInserted) => Ok(false),
            Err(e) if is_foreign_key_violation(&e) => Err(MatchingServiceError::TargetNotFound),
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("insert {} decision", decision.kind))
                .into()),
        }
    }
}

// ── Location repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbLocationRepository {
    pub db: DatabaseConnection,
}

impl LocationRepository for DbLocationRepository {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Location>, MatchingServiceError> {
        let model = locations::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .context("find location by user")?;
        Ok(model.map(|m| Location {
            user_id: m.user_id,
            coordinates: Coordinates {
                lat: m.lat,
                lng: m.lng,
            },
            updated_at: m.updated_at,
        }))
    }

    async fn upsert(&self, location: &Location) -> Result<(), MatchingServiceError> {
        // The geography point is rebuilt from lng/lat on every write.
        let sql = r#"
            INSERT INTO locations (user_id, lat, lng, location, updated_at)
            VALUES (
                $1, $2, $3,
                ST_SetSRID(ST_MakePoint($3::double precision, $2::double precision), 4326)::geography,
                $4
            )
            ON CONFLICT (user_id) DO UPDATE SET
                lat = EXCLUDED.lat,
                lng = EXCLUDED.lng,
                location = EXCLUDED.location,
                updated_at = EXCLUDED.updated_at
        "#;

        let result = self
            .db
            .execute(Statement::from_sql_and_values(
                self.db.get_database_backend(),
                sql,
                [
                    location.user_id.into(),
                    location.coordinates.lat.into(),
                    location.coordinates.lng.into(),
                    location.updated_at.into(),
                ],
            ))
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_foreign_key_violation(&e) => Err(MatchingServiceError::UserNotFound),
            Err(e) => Err(anyhow::Error::new(e).context("upsert location").into()),
        }
    }
}

// ── Recommendation repository ────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRecommendationRepository {
    pub db: DatabaseConnection,
}

impl RecommendationRepository for DbRecommendationRepository {
    async fn find_candidates(
        &self,
        query: &CandidateQuery,
    ) -> Result<Vec<Candidate>, MatchingServiceError> {
        // Filter and reported distance both use the mean-radius sphere (use_spheroid = false).
        let sql = r#"
            WITH origin AS (
                SELECT ST_SetSRID(
                    ST_MakePoint($2::double precision, $3::double precision), 4326
                )::geography AS point
            )
            SELECT
                l.user_id,
                u.birth_date,
                ST_Distance(l.location, origin.point, false) AS distance_meters,
                l.updated_at
            FROM locations l
            JOIN users u ON u.id = l.user_id
            CROSS JOIN origin
            WHERE l.user_id <> $1
              AND ST_DWithin(l.location, origin.point, $4::double precision, false)
              AND NOT EXISTS (
                  SELECT 1 FROM likes k WHERE k.self_id = $1 AND k.target_id = l.user_id
              )
              AND NOT EXISTS (
                  SELECT 1 FROM passes p WHERE p.self_id = $1 AND p.target_id = l.user_id
              )
            ORDER BY l.updated_at DESC, l.user_id
            LIMIT $5
        "#;

        #[derive(Debug, FromQueryResult)]
        struct CandidateRow {
            user_id: Uuid,
            birth_date: NaiveDate,
            distance_meters: f64,
            updated_at: DateTime<Utc>,
        }

        let rows = CandidateRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            [
                query.actor_id.into(),
                query.origin.lng.into(),
                query.origin.lat.into(),
                query.radius_meters.into(),
                i64::from(query.limit).into(),
            ],
        ))
        .all(&self.db)
        .await
        .context("find recommendation candidates")?;

        Ok(rows
            .into_iter()
            .map(|row| Candidate {
                user_id: row.user_id,
                birth_date: row.birth_date,
                distance_meters: row.distance_meters,
                location_updated_at: row.updated_at,
            })
            .collect())
    }
}

// ── Subscription ledger ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSubscriptionLedger {
    pub db: DatabaseConnection,
}

impl SubscriptionLedger for DbSubscriptionLedger {
    async fn redeem(
        &self,
        user_id: Uuid,
        code: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<Redemption>, MatchingServiceError> {
        #[derive(Debug, FromQueryResult)]
        struct PendingRow {
            redemption_id: Uuid,
            coupon_id: Uuid,
            duration_secs: i64,
            subscribe_until: Option<DateTime<Utc>>,
        }

        // Row locks on the redemption and the user serialize concurrent
        // redemptions; a waiter re-checks `used_at IS NULL` after the lock.
        let select_sql = r#"
            SELECT r.id AS redemption_id, r.coupon_id, c.duration_secs, u.subscribe_until
            FROM coupon_redemptions r
            JOIN coupons c ON c.id = r.coupon_id
            JOIN users u ON u.id = r.user_id
            WHERE r.user_id = $1 AND c.code = $2 AND r.used_at IS NULL
            ORDER BY r.created_at
            LIMIT 1
            FOR UPDATE OF r, u
        "#;

        let code = code.to_owned();
        let result = self
            .db
            .transaction::<_, Option<Redemption>, DbErr>(|txn| {
                Box::pin(async move {
                    let Some(row) = PendingRow::find_by_statement(Statement::from_sql_and_values(
                        txn.get_database_backend(),
                        select_sql,
                        [user_id.into(), code.into()],
                    ))
                    .one(txn)
                    .await?
                    else {
                        return Ok(None);
                    };

                    let subscribe_until =
                        extended_until(row.subscribe_until, now, row.duration_secs).ok_or_else(
                            || DbErr::Custom("subscription expiry out of range".to_owned()),
                        )?;

                    users::ActiveModel {
                        id: Set(user_id),
                        subscribe_until: Set(Some(subscribe_until)),
                        ..Default::default()
                    }
                    .update(txn)
                    .await?;

                    let marked = coupon_redemptions::Entity::update_many()
                        .col_expr(coupon_redemptions::Column::UsedAt, Expr::value(now))
                        .filter(coupon_redemptions::Column::Id.eq(row.redemption_id))
                        .filter(coupon_redemptions::Column::UsedAt.is_null())
                        .exec(txn)
                        .await?;
                    if marked.rows_affected != 1 {
                        // Roll back the expiry change.
                        return Err(DbErr::RecordNotUpdated);
                    }

                    Ok(Some(Redemption {
                        redemption_id: row.redemption_id,
                        coupon_id: row.coupon_id,
                        subscribe_until,
                        used_at: now,
                    }))
                })
            })
            .await;

        match result {
            Ok(redemption) => Ok(redemption),
            Err(TransactionError::Transaction(DbErr::RecordNotUpdated)) => Ok(None),
            Err(e) => Err(anyhow::Error::new(e).context("redeem coupon").into()),
        }
    }
}

// ── Coupon repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCouponRepository {
    pub db: DatabaseConnection,
}

impl CouponRepository for DbCouponRepository {
    async fn create(&self, coupon: &Coupon) -> Result<(), MatchingServiceError> {
        let result = coupons::ActiveModel {
            id: Set(coupon.id),
            code: Set(coupon.code.clone()),
            duration_secs: Set(coupon.duration_secs),
            valid_until: Set(coupon.valid_until),
            created_at: Set(coupon.created_at),
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(MatchingServiceError::CouponAlreadyExists),
            Err(e) => Err(anyhow::Error::new(e).context("create coupon").into()),
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Coupon>, MatchingServiceError> {
        let model = coupons::Entity::find()
            .filter(coupons::Column::Code.eq(code))
            .one(&self.db)
            .await
            .context("find coupon by code")?;
        Ok(model.map(|m| Coupon {
            id: m.id,
            code: m.code,
            duration_secs: m.duration_secs,
            valid_until: m.valid_until,
            created_at: m.created_at,
        }))
    }

    async fn assign(&self, redemption: &CouponRedemption) -> Result<(), MatchingServiceError> {
        let result = coupon_redemptions::ActiveModel {
            id: Set(redemption.id),
            user_id: Set(redemption.user_id),
            coupon_id: Set(redemption.coupon_id),
            used_at: Set(redemption.used_at),
            created_at: Set(redemption.created_at),
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(MatchingServiceError::CouponAlreadyAssigned),
            Err(e) if is_foreign_key_violation(&e) => Err(MatchingServiceError::UserNotFound),
            Err(e) => Err(anyhow::Error::new(e).context("assign coupon").into()),
        }
    }
}
