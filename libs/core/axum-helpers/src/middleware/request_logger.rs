use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// Log method, route, status and latency for every request.
///
/// The route template (`/employees/{id}`) is used when the request matched
/// one, otherwise the raw path.
pub async fn request_logger(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    tracing::debug!(%method, %path, "Handling request");

    let response = next.run(request).await;

    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        tracing::warn!(%method, %path, status, latency_ms, "Request finished");
    } else {
        tracing::info!(%method, %path, status, latency_ms, "Request finished");
    }

    response
}
