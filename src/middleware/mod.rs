// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides request spans, per-request access logging and CORS configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

/// CORS configuration
pub mod cors;
/// Request tracing and access logging
pub mod tracing;

pub use cors::setup_cors;
pub use tracing::{create_request_span, log_request, REQUEST_ID_HEADER};
