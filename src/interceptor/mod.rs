//! Request interceptors, applied as axum middleware.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Logs method, uri, status and latency of every request.
///
/// Mount with `axum::middleware::from_fn(logging)`.
pub async fn logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    tracing::debug!(%method, %uri, "--> request");

    let response = next.run(request).await;
    let status = response.status();
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

    if status.is_server_error() {
        tracing::warn!(%method, %uri, status = status.as_u16(), latency_ms, "<-- response");
    } else {
        tracing::info!(%method, %uri, status = status.as_u16(), latency_ms, "<-- response");
    }

    response
}
