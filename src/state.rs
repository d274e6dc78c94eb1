//! Shared application state for request handlers.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::AppConfig;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Holds the resolved configuration and the instant the service started,
/// which `/health` reports as uptime. Nothing in here is mutated after
/// construction.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub started_at: Instant,
}

impl AppState {
    /// Creates a new application state, starting the uptime clock now.
    pub fn new(config: AppConfig) -> Self {
        Self::with_start(config, Instant::now())
    }

    /// Creates a state whose uptime is measured from `started_at`.
    pub fn with_start(config: AppConfig, started_at: Instant) -> Self {
        Self {
            config: Arc::new(config),
            started_at,
        }
    }

    /// Time elapsed since the service started.
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
