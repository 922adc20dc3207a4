use axum::{
    Json,
    extract::{RawQuery, State},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use swipe_auth_types::identity::IdentityHeaders;

use crate::domain::types::Candidate;
use crate::error::MatchingServiceError;
use crate::state::AppState;
use crate::usecase::recommendation::FindCandidatesUseCase;

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CandidateResponse {
    pub id: Uuid,
    pub birth_of_date: NaiveDate,
    pub distance_in_meter: f64,
}

impl From<Candidate> for CandidateResponse {
    fn from(c: Candidate) -> Self {
        Self {
            id: c.user_id,
            birth_of_date: c.birth_date,
            distance_in_meter: c.distance_meters,
        }
    }
}

#[derive(Serialize)]
pub struct RecommendationsResponse {
    pub data: Vec<CandidateResponse>,
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct RecommendationQuery {
    pub limit: Option<i64>,
}

/// `limit` is required; anything that is not an integer is rejected the same
/// way as a non-positive one.
fn parse_limit(raw_query: Option<&str>) -> Result<i64, MatchingServiceError> {
    let query: RecommendationQuery = raw_query
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| MatchingServiceError::InvalidLimit)?
        .unwrap_or_default();
    query.limit.ok_or(MatchingServiceError::InvalidLimit)
}

// ── GET /recommendations ─────────────────────────────────────────────────────

pub async fn get_recommendations(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<RecommendationsResponse>, MatchingServiceError> {
    let limit = parse_limit(raw_query.as_deref())?;

    let uc = FindCandidatesUseCase {
        locations: state.location_repo(),
        recommendations: state.recommendation_repo(),
    };
    let candidates = uc.execute(identity.user_id, limit).await?;
    Ok(Json(RecommendationsResponse {
        data: candidates.into_iter().map(Into::into).collect(),
    }))
}
