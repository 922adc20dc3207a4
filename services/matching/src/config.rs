use std::time::Duration;

use serde::Deserialize;

use swipe_core::config::Config;

/// Matching service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct MatchingConfig {
    /// PostgreSQL (PostGIS) connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// Redis connection URL. Env var: `REDIS_URL`.
    pub redis_url: String,
    /// TCP port to listen on (default 3114). Env var: `MATCHING_PORT`.
    #[serde(default = "default_port")]
    pub matching_port: u16,
    /// Per-request deadline in seconds (default 10). Env var: `REQUEST_TIMEOUT_SECS`.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_port() -> u16 {
    3114
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl Config for MatchingConfig {}

impl MatchingConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}
