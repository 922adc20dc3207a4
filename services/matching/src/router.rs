use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;

use swipe_core::health::healthz;
use swipe_core::middleware::{
    propagate_request_id_layer, request_id_layer, timeout_layer, trace_layer,
};

use crate::handlers::{
    coupon::{apply_coupon, create_coupon},
    decision::{create_decision, like_user, pass_user},
    health::readyz,
    location::update_location,
    recommendation::get_recommendations,
    subscription::subscribe,
    user::get_me,
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(request_id_layer())
        .layer(trace_layer())
        .layer(propagate_request_id_layer())
        .layer(timeout_layer(state.request_timeout));

    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Decisions
        .route("/decisions", post(create_decision))
        .route("/actions/likes", post(like_user))
        .route("/actions/passes", post(pass_user))
        // Recommendations
        .route("/recommendations", get(get_recommendations))
        // Users
        .route("/users/@me", get(get_me))
        .route("/users/@me/subscription", post(subscribe))
        .route("/users/subscribe", post(subscribe))
        // Locations
        .route("/locations", post(update_location))
        // Coupons
        .route("/coupons", post(create_coupon))
        .route("/coupons/apply", post(apply_coupon))
        .layer(middleware)
        .with_state(state)
}
