//! Request/response logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

/// Logs request method, path, status, and duration.
///
/// Token routes are logged by prefix only so signing links never land in logs.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = redact_path(request.uri().path());
    let start = Instant::now();

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    if response.status().is_server_error() {
        warn!(method = %method, path = %path, status, duration_ms, "HTTP request failed");
    } else {
        info!(method = %method, path = %path, status, duration_ms, "HTTP request");
    }

    response
}

/// Replaces the signing token in token routes with a placeholder.
pub fn redact_path(path: &str) -> String {
    const SIGN_PREFIX: &str = "/api/documents/sign/";
    match path.strip_prefix(SIGN_PREFIX) {
        Some(_) => format!("{SIGN_PREFIX}:token"),
        None => path.to_string(),
    }
}
