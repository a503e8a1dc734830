// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Creates spans keyed by request ID and logs one access line per HTTP request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

use std::time::Instant;

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use tracing::Span;

use crate::logging::AppLogger;

/// Header carrying the request correlation ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

fn request_id(request: &Request<Body>) -> &str {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown")
}

/// Create a tracing span for an HTTP request
///
/// Used as the `TraceLayer` span factory so every event logged while the
/// request is in flight carries its method, path and request ID.
pub fn create_request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id(request),
        status_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    )
}

/// Access-log middleware: one structured line per request
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    let status = response.status().as_u16();

    let span = Span::current();
    span.record("status_code", status);
    span.record("duration_ms", duration_ms);

    AppLogger::log_api_request(&method, &path, status, duration_ms);
    response
}
