//! Per-request tracing span.
//!
//! Every request runs inside a `request` span tagged with a fresh UUID v4,
//! so anything a handler logs can be tied back to one request. The
//! completion event is `debug`, so at the default filter nothing per request
//! reaches stdout.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Wraps request handling in a span carrying request id, method and path.
///
/// Install as the outermost layer. Responses pass through unchanged.
pub async fn request_span_layer(request: Request, next: Next) -> Response {
    let span = tracing::info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %request.method(),
        path = %request.uri().path(),
    );
    let started = Instant::now();

    async move {
        let response = next.run(request).await;
        tracing::debug!(
            status = response.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Request finished"
        );
        response
    }
    .instrument(span)
    .await
}
