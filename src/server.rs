// ABOUTME: HTTP server assembly: router, middleware stack, and the serve loop
// ABOUTME: Binds the configured address and shuts down gracefully on Ctrl-C
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::middleware::{create_request_span, record_response, setup_cors, RequestIdGenerator};
use crate::resources::ServerResources;
use crate::routes::{HealthRoutes, PredictRoutes};
use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Assemble every route with the middleware stack.
///
/// Outermost first: request id assignment, request span, request id
/// propagation to the response, CORS, body limit, timeout. The body limit
/// is enforced by the JSON extractors so oversized payloads get the same
/// error envelope as every other rejection.
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let config = Arc::clone(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(PredictRoutes::routes(resources))
        .layer(TimeoutLayer::new(config.http.request_timeout()))
        .layer(DefaultBodyLimit::max(config.http.max_request_body_bytes))
        .layer(setup_cors(&config.cors))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(create_request_span)
                .on_response(record_response),
        )
        .layer(SetRequestIdLayer::x_request_id(RequestIdGenerator))
}

/// Bind and serve until Ctrl-C
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn serve(resources: ServerResources) -> Result<()> {
    let address = resources.config.bind_address();
    let ready = resources.pipeline.is_ready();
    let router = build_router(Arc::new(resources));

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(address = %address, models_ready = ready, "Obesity Insight server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server terminated with an error")?;

    info!("Obesity Insight server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl-C, shutting down");
    }
}
