use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Deserialize;

use swipe_auth_types::identity::IdentityHeaders;

use crate::error::MatchingServiceError;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::location::UpdateLocationUseCase;

#[derive(Deserialize)]
pub struct UpdateLocationRequest {
    pub lat: f64,
    pub lng: f64,
}

// ── POST /locations ──────────────────────────────────────────────────────────

pub async fn update_location(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    body: Result<Json<UpdateLocationRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, MatchingServiceError> {
    let Json(body) = body?;
    let uc = UpdateLocationUseCase {
        repo: state.location_repo(),
    };
    uc.execute(identity.user_id, body.lat, body.lng).await?;
    Ok(Json(MessageResponse::new("success update location")))
}
