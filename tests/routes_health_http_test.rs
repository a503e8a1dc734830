// ABOUTME: HTTP integration tests for the health and readiness endpoints
// ABOUTME: Verifies status payloads and RFC 3339 timestamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;
use indian_coffee_beans::routes::HealthRoutes;
use serde_json::Value;

#[tokio::test]
async fn test_health_endpoint() {
    let response = AxumTestRequest::get("/health")
        .send(HealthRoutes::routes())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "icb-brew-server");

    let timestamp = body["timestamp"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn test_ready_endpoint_reports_catalog() {
    let response = AxumTestRequest::get("/ready")
        .send(HealthRoutes::routes())
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["methods"], 14);
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let response = AxumTestRequest::get("/status")
        .send(HealthRoutes::routes())
        .await;
    assert_eq!(response.status(), 404);
}
