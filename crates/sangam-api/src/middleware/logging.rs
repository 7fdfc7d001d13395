//! Request logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Logs one line per request with method, path, status, and latency.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis();

    if status.is_server_error() {
        tracing::error!(%method, %path, %status, elapsed_ms, "Request failed");
    } else if status.is_client_error() {
        tracing::warn!(%method, %path, %status, elapsed_ms, "Request rejected");
    } else {
        tracing::info!(%method, %path, %status, elapsed_ms, "Request completed");
    }

    response
}
