use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Access log for every request, matched or not
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed = ?started.elapsed(),
        "handled request"
    );

    response
}
