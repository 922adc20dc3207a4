use chrono::Utc;
use uuid::Uuid;

use swipe_domain::geo::Coordinates;

use crate::domain::repository::LocationRepository;
use crate::domain::types::Location;
use crate::error::MatchingServiceError;

// ── UpdateLocation ───────────────────────────────────────────────────────────

pub struct UpdateLocationUseCase<L: LocationRepository> {
    pub repo: L,
}

impl<L: LocationRepository> UpdateLocationUseCase<L> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        lat: f64,
        lng: f64,
    ) -> Result<Location, MatchingServiceError> {
        let location = Location {
            user_id,
            coordinates: Coordinates::new(lat, lng)?,
            updated_at: Utc::now(),
        };
        self.repo.upsert(&location).await?;
        Ok(location)
    }
}
