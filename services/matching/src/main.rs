use sea_orm::Database;
use tokio::signal;
use tracing::info;

use swipe_core::config::Config;
use swipe_core::tracing::init_tracing;
use swipe_matching::config::MatchingConfig;
use swipe_matching::router::build_router;
use swipe_matching::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = MatchingConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let redis_cfg = deadpool_redis::Config::from_url(&config.redis_url);
    let redis = redis_cfg
        .create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .expect("failed to create Redis pool");

    let state = AppState {
        db: db.clone(),
        redis,
        request_timeout: config.request_timeout(),
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.matching_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("matching service listening on {http_addr}");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    if let Err(e) = db.close().await {
        tracing::warn!(error = %e, "failed to close database pool");
    }
    info!("matching service stopped");
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
        info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
        info!("received SIGTERM, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
