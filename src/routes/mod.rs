//! HTTP route handlers.
//!
//! Three fixed GET routes, each answering with a JSON body built fresh per
//! request. Anything else falls through to axum's defaults: 404 for an
//! unknown path, 405 for a known path with another method.
//!
//! Each request runs inside a tracing span tagged with a request id.

pub mod health;
pub mod home;
pub mod status;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::middleware::request_span_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes.
///
/// The returned router is ready to serve; it does not bind a socket, so it
/// can be driven in-process by tests.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health::health))
        .route("/", get(home::index))
        .route("/api/status", get(status::status))
        // Payloads carry per-request values (time, uptime, deployed version)
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    Router::new()
        .merge(api_routes)
        .with_state(state)
        // Request span - outermost so it wraps every other layer
        .layer(middleware::from_fn(request_span_layer))
}
