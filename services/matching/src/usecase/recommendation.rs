use uuid::Uuid;

use crate::domain::repository::{LocationRepository, RecommendationRepository};
use crate::domain::types::{Candidate, CandidateQuery, RECOMMENDATION_RADIUS_METERS};
use crate::error::MatchingServiceError;

// ── FindCandidates ───────────────────────────────────────────────────────────

pub struct FindCandidatesUseCase<L: LocationRepository, R: RecommendationRepository> {
    pub locations: L,
    pub recommendations: R,
}

impl<L: LocationRepository, R: RecommendationRepository> FindCandidatesUseCase<L, R> {
    /// Up to `limit` nearby candidates for `actor_id`, most recently located first.
    pub async fn execute(
        &self,
        actor_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Candidate>, MatchingServiceError> {
        if limit < 1 {
            return Err(MatchingServiceError::InvalidLimit);
        }
        // Larger than any candidate set; clamp instead of rejecting.
        let limit = u32::try_from(limit).unwrap_or(u32::MAX);

        let origin = self
            .locations
            .find_by_user(actor_id)
            .await?
            .ok_or(MatchingServiceError::LocationNotFound)?;

        let query = CandidateQuery {
            actor_id,
            origin: origin.coordinates,
            radius_meters: RECOMMENDATION_RADIUS_METERS,
            limit,
        };
        let mut candidates = self.recommendations.find_candidates(&query).await?;

        candidates.retain(|c| c.user_id != actor_id && c.distance_meters <= query.radius_meters);
        candidates.truncate(limit as usize);
        Ok(candidates)
    }
}
