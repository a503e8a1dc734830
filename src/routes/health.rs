// ABOUTME: Health check route handlers for service monitoring and status endpoints
// ABOUTME: Provides liveness and readiness endpoints for load balancers and uptime checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

//! Health check routes for service monitoring

use axum::{routing::get, Json, Router};
use chrono::Utc;
use icb_brewing::brewing_methods;
use icb_core::constants::service_names;
use serde_json::{json, Value};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> Router {
        Router::new()
            .route("/health", get(Self::handle_health))
            .route("/ready", get(Self::handle_ready))
    }

    async fn handle_health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": service_names::ICB_BREW_SERVER,
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": Utc::now().to_rfc3339()
        }))
    }

    // The catalog is static, so readiness only confirms it is populated
    async fn handle_ready() -> Json<Value> {
        let methods = brewing_methods().len();
        Json(json!({
            "status": if methods > 0 { "ready" } else { "not_ready" },
            "methods": methods,
            "timestamp": Utc::now().to_rfc3339()
        }))
    }
}
