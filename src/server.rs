// ABOUTME: HTTP server assembly and lifecycle for the brew API
// ABOUTME: Builds the axum router with tracing, request-id and CORS layers and serves it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Indian Coffee Beans

use std::future::pending;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{http::HeaderName, middleware as axum_middleware, Router};
use tokio::{net::TcpListener, signal};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::middleware::{create_request_span, log_request, setup_cors, REQUEST_ID_HEADER};
use crate::routes::{BrewRoutes, HealthRoutes};

/// Build the full application router
///
/// Layer order, outermost first: request ID assignment, tracing span,
/// request-id propagation to the response, CORS, access log.
pub fn build_router(config: &ServerConfig) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(BrewRoutes::routes(Arc::new(config.brewing.clone())))
        .layer(axum_middleware::from_fn(log_request))
        .layer(setup_cors(&config.cors_allowed_origins))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(
                    request_id_header.clone(),
                    MakeRequestUuid,
                ))
                .layer(TraceLayer::new_for_http().make_span_with(create_request_span))
                .layer(PropagateRequestIdLayer::new(request_id_header)),
        )
}

/// Bind and serve until Ctrl-C or SIGTERM
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails
pub async fn run(config: ServerConfig) -> Result<()> {
    let addr = config.bind_addr();
    let app = build_router(&config);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;
    info!("HTTP server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {e}");
                pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install terminate handler: {e}");
                pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
