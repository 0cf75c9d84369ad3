use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use rheum_bedrock::client::duration_ms;

/// Audit logging middleware.
///
/// Logs method, path, status and latency of every request. Bodies carry
/// clinical data and are never logged.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let elapsed_ms = duration_ms(started.elapsed());
    tracing::info!(
        method = %method,
        path = %uri,
        status = status,
        elapsed_ms,
        "api_request"
    );

    response
}
