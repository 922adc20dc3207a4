use std::time::Duration;

use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use uuid::Uuid;

use swipe_core::middleware::REQUEST_ID_HEADER;
use swipe_matching::router::build_router;
use swipe_matching::state::AppState;
use swipe_testing::auth::MockAuth;

/// Router over unreachable backends. Only paths that answer before touching
/// the database or Redis can succeed.
fn server() -> TestServer {
    let redis = deadpool_redis::Config::from_url("redis://127.0.0.1:1")
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .unwrap();
    let state = AppState {
        db: DatabaseConnection::Disconnected,
        redis,
        request_timeout: Duration::from_secs(5),
    };
    TestServer::new(build_router(state)).unwrap()
}

#[tokio::test]
async fn should_answer_liveness() {
    let response = server().get("/healthz").await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn should_report_unready_backends() {
    let response = server().get("/readyz").await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["ready"], false);
}

#[tokio::test]
async fn should_attach_request_id() {
    let response = server().get("/healthz").await;

    let id = response.headers().get(REQUEST_ID_HEADER).unwrap();
    assert!(id.to_str().unwrap().parse::<Uuid>().is_ok());
}

#[tokio::test]
async fn should_reject_missing_identity() {
    let response = server()
        .post("/decisions")
        .json(&json!({ "target_id": Uuid::now_v7(), "kind": "like" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_unknown_decision_kind() {
    let (name, value) = MockAuth::new(Uuid::now_v7()).header();
    let response = server()
        .post("/decisions")
        .add_header(name, value)
        .json(&json!({ "target_id": Uuid::now_v7(), "kind": "superlike" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "INVALID_REQUEST");
}

#[tokio::test]
async fn should_reject_missing_target_on_like_route() {
    let (name, value) = MockAuth::new(Uuid::now_v7()).header();
    let response = server()
        .post("/actions/likes")
        .add_header(name, value)
        .json(&json!({}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_require_limit_for_recommendations() {
    let server = server();
    for path in [
        "/recommendations",
        "/recommendations?limit=0",
        "/recommendations?limit=-2",
        "/recommendations?limit=abc",
    ] {
        let (name, value) = MockAuth::new(Uuid::now_v7()).header();
        let response = server.get(path).add_header(name, value).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{path}");
        let body: Value = response.json();
        assert_eq!(body["kind"], "INVALID_LIMIT", "{path}");
        assert_eq!(body["message"], "limit must be a positive integer");
    }
}

#[tokio::test]
async fn should_reject_out_of_range_location() {
    let (name, value) = MockAuth::new(Uuid::now_v7()).header();
    let response = server()
        .post("/locations")
        .add_header(name, value)
        .json(&json!({ "lat": 120.0, "lng": 10.0 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "INVALID_LOCATION");
}

#[tokio::test]
async fn should_reject_empty_coupon_code_on_subscribe() {
    let (name, value) = MockAuth::new(Uuid::now_v7()).header();
    let response = server()
        .post("/users/@me/subscription")
        .add_header(name, value)
        .json(&json!({ "coupon_code": "" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "INVALID_REQUEST");
}

#[tokio::test]
async fn should_route_legacy_subscribe_path() {
    let (name, value) = MockAuth::new(Uuid::now_v7()).header();
    let response = server()
        .post("/users/subscribe")
        .add_header(name, value)
        .json(&json!({ "coupon_code": "  " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "INVALID_REQUEST");
}

#[tokio::test]
async fn should_require_identity_on_legacy_subscribe_path() {
    let response = server()
        .post("/users/subscribe")
        .json(&json!({ "coupon_code": "MONTH30" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_reject_malformed_coupon() {
    let response = server()
        .post("/coupons")
        .json(&json!({ "code": "ab", "duration_in_second": 60, "valid_until": 1_900_000_000 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["kind"], "INVALID_COUPON");
}
