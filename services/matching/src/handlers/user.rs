use axum::{Json, extract::State};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use swipe_auth_types::identity::IdentityHeaders;
use swipe_domain::subscription::is_active;

use crate::domain::types::User;
use crate::error::MatchingServiceError;
use crate::state::AppState;
use crate::usecase::actor::GetMeUseCase;

#[derive(Serialize)]
pub struct MeResponse {
    pub id: Uuid,
    pub email: String,
    pub birth_of_date: NaiveDate,
    pub is_subscriber: bool,
    #[serde(serialize_with = "swipe_core::serde::to_rfc3339_ms_opt")]
    pub subscribe_until: Option<DateTime<Utc>>,
    #[serde(serialize_with = "swipe_core::serde::to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
}

impl From<User> for MeResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            birth_of_date: user.birth_date,
            is_subscriber: is_active(user.subscribe_until, Utc::now()),
            subscribe_until: user.subscribe_until,
            created_at: user.created_at,
        }
    }
}

// ── GET /users/@me ───────────────────────────────────────────────────────────

pub async fn get_me(
    identity: IdentityHeaders,
    State(state): State<AppState>,
) -> Result<Json<MeResponse>, MatchingServiceError> {
    let uc = GetMeUseCase {
        repo: state.user_repo(),
    };
    let user = uc.execute(identity.user_id).await?;
    Ok(Json(user.into()))
}
