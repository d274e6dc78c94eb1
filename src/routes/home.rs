//! Root endpoint: greeting plus the deployed version and environment.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::state::AppState;

pub const WELCOME_MESSAGE: &str = "Welcome to DevOps Studio CI/CD Lab";

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub environment: String,
}

impl RootResponse {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            message: WELCOME_MESSAGE.to_string(),
            version: config.app.version.clone(),
            environment: config.app.environment.clone(),
        }
    }
}

/// Root handler.
pub async fn index(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse::from_config(&state.config))
}
