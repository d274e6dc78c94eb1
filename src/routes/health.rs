//! Health check endpoint for container orchestration.
//!
//! Used by the pipeline's smoke tests, Kubernetes probes and load balancers
//! to verify the service is alive. Reports wall-clock time and uptime.

use std::time::Duration;

use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Status string reported while the process can answer requests
pub const HEALTHY: &str = "healthy";

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Current UTC time, RFC 3339 with millisecond precision
    pub timestamp: String,
    /// Seconds since the service started
    pub uptime: f64,
}

impl HealthResponse {
    pub fn healthy(uptime: Duration) -> Self {
        Self {
            status: HEALTHY.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            uptime: uptime.as_secs_f64(),
        }
    }
}

/// Health check handler.
///
/// This is a liveness probe; it only checks that the process can respond to HTTP.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.uptime()))
}
