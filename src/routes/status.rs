//! Service status endpoint.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::state::AppState;

/// Service name reported by `/api/status`
pub const SERVICE_NAME: &str = "devops-studio-app";

pub const OPERATIONAL: &str = "operational";

/// Body of `GET /api/status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub service: String,
    pub status: String,
    pub version: String,
}

impl StatusResponse {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
            status: OPERATIONAL.to_string(),
            version: config.app.version.clone(),
        }
    }
}

/// Status handler. Always reports the service as operational.
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse::from_config(&state.config))
}
