use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use swipe_core::health::{Readiness, readiness};

use crate::infra::cache;
use crate::state::AppState;

// ── GET /readyz ──────────────────────────────────────────────────────────────

pub async fn readyz(State(state): State<AppState>) -> (StatusCode, Json<Readiness>) {
    let (database, redis) = tokio::join!(state.db.ping(), cache::ping(&state.redis));
    readiness(vec![("database", database.is_ok()), ("redis", redis)])
}
