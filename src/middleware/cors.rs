// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Lets the website's browser calculator call the brew API cross-origin
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

use axum::http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use super::tracing::REQUEST_ID_HEADER;

/// Configure CORS from a comma-separated origin list
///
/// An empty list or `*` allows any origin. Only the read and calculate
/// verbs the brew API serves are permitted.
///
/// ```bash
/// export CORS_ALLOWED_ORIGINS="https://indiancoffeebeans.com,https://www.indiancoffeebeans.com"
/// ```
#[must_use]
pub fn setup_cors(allowed_origins: &str) -> CorsLayer {
    let allow_origin = if allowed_origins.trim().is_empty() || allowed_origins.trim() == "*" {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .filter_map(|s| {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    HeaderValue::from_str(trimmed).ok()
                }
            })
            .collect();

        if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
