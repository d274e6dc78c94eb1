//! DevOps Studio demo service.
//!
//! A small JSON service used as the deployable artifact in the CI/CD
//! pipeline lab. It answers `/health`, `/` and `/api/status`.
//!
//! The router is exported so test harnesses can drive it in-process:
//!
//! ```no_run
//! use devops_studio_app::{config::AppConfig, routes::create_router, state::AppState};
//!
//! let router = create_router(AppState::new(AppConfig::default()));
//! ```

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;

#[cfg(test)]
mod test_support;

pub use config::{AppConfig, ConfigError};
pub use self::http::ServerError;
pub use routes::create_router;
pub use state::AppState;
