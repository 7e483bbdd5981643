//! Middleware for logging each request and its outcome.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// Log one line per request with the response status and how long the
/// handler took.
///
/// Successful requests are logged at the `info` level, server errors at
/// the `error` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let started = Instant::now();
    let response = next.run(request).await;
    let elapsed = started.elapsed();

    let status = response.status();
    if status.is_server_error() {
        tracing::error!("{method} {uri} responded {status} after {elapsed:.2?}");
    } else {
        tracing::info!("{method} {uri} responded {status} after {elapsed:.2?}");
    }

    response
}
