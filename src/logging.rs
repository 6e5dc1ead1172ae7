//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::{StatusCode, request, response},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// The maximum number of bytes of a request or response body to log at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If the body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body = match buffer_body(body).await {
        Ok(body) => body,
        Err(error) => {
            tracing::error!("Could not read request body: {error}");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };
    log_request(&parts, &String::from_utf8_lossy(&body));

    let response = next.run(Request::from_parts(parts, Body::from(body))).await;

    let (parts, body) = response.into_parts();
    let body = match buffer_body(body).await {
        Ok(body) => body,
        Err(error) => {
            tracing::error!("Could not read response body: {error}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    log_response(&parts, &String::from_utf8_lossy(&body));

    Response::from_parts(parts, Body::from(body))
}

async fn buffer_body(body: Body) -> Result<Bytes, axum::Error> {
    axum::body::to_bytes(body, usize::MAX).await
}

/// Cut `body` down to at most [LOG_BODY_LENGTH_LIMIT] bytes without splitting a character.
fn truncate_body(body: &str) -> Option<&str> {
    if body.len() <= LOG_BODY_LENGTH_LIMIT {
        return None;
    }

    let end = body
        .char_indices()
        .map(|(index, _)| index)
        .take_while(|&index| index <= LOG_BODY_LENGTH_LIMIT)
        .last()
        .unwrap_or(0);

    Some(&body[..end])
}

fn log_request(parts: &request::Parts, body: &str) {
    let (method, uri) = (&parts.method, &parts.uri);

    match truncate_body(body) {
        Some(truncated) => {
            tracing::info!("Received request: {method} {uri}\nbody: {truncated}...");
            tracing::debug!("Full request body: {body:?}");
        }
        None => tracing::info!("Received request: {method} {uri}\nbody: {body:?}"),
    }
}

fn log_response(parts: &response::Parts, body: &str) {
    let status = parts.status;

    match truncate_body(body) {
        Some(truncated) => {
            tracing::info!("Sending response: {status}\nbody: {truncated}...");
            tracing::debug!("Full response body: {body:?}");
        }
        None => tracing::info!("Sending response: {status}\nbody: {body:?}"),
    }
}
