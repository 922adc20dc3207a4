use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Deserialize;
use uuid::Uuid;

use swipe_auth_types::identity::IdentityHeaders;
use swipe_domain::decision::DecisionKind;

use crate::error::MatchingServiceError;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::actor::ResolveActorUseCase;
use crate::usecase::decision::{RecordDecisionInput, RecordDecisionUseCase};

#[derive(Deserialize)]
pub struct CreateDecisionRequest {
    pub target_id: Uuid,
    pub kind: DecisionKind,
}

/// Body of the kind-specific routes.
#[derive(Deserialize)]
pub struct TargetRequest {
    pub id: Uuid,
}

async fn record(
    state: AppState,
    user_id: Uuid,
    input: RecordDecisionInput,
) -> Result<Json<MessageResponse>, MatchingServiceError> {
    let actor = ResolveActorUseCase {
        repo: state.user_repo(),
    }
    .execute(user_id)
    .await?;

    let uc = RecordDecisionUseCase {
        decisions: state.decision_repo(),
        cache: state.decision_cache(),
    };
    let output = uc.execute(actor, input).await?;
    Ok(Json(MessageResponse::new(output.message())))
}

// ── POST /decisions ──────────────────────────────────────────────────────────

pub async fn create_decision(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    body: Result<Json<CreateDecisionRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, MatchingServiceError> {
    let Json(body) = body?;
    let input = RecordDecisionInput {
        target_id: body.target_id,
        kind: body.kind,
    };
    record(state, identity.user_id, input).await
}

// ── POST /actions/likes ──────────────────────────────────────────────────────

pub async fn like_user(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    body: Result<Json<TargetRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, MatchingServiceError> {
    let Json(body) = body?;
    let input = RecordDecisionInput {
        target_id: body.id,
        kind: DecisionKind::Like,
    };
    record(state, identity.user_id, input).await
}

// ── POST /actions/passes ─────────────────────────────────────────────────────

pub async fn pass_user(
    identity: IdentityHeaders,
    State(state): State<AppState>,
    body: Result<Json<TargetRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, MatchingServiceError> {
    let Json(body) = body?;
    let input = RecordDecisionInput {
        target_id: body.id,
        kind: DecisionKind::Pass,
    };
    record(state, identity.user_id, input).await
}
