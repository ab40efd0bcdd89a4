// ABOUTME: HTTP integration tests for health check routes
// ABOUTME: Liveness always answers; readiness follows the model load outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::axum_test::AxumTestRequest;
use helpers::fixtures::{ready_resources, unavailable_resources};
use obesity_insight_server::resources::ServerResources;
use obesity_insight_server::routes::HealthRoutes;
use obesity_insight_server::server::build_router;
use serde_json::Value;
use std::sync::Arc;

/// Get health routes for testing
fn health_routes(resources: ServerResources) -> axum::Router {
    HealthRoutes::routes(Arc::new(resources))
}

// ============================================================================
// GET /health
// ============================================================================

#[tokio::test]
async fn test_health_endpoint_success() {
    let response = AxumTestRequest::get("/health")
        .send(health_routes(unavailable_resources()))
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
    assert!(body["version"].is_string());
}

// ============================================================================
// GET /ready
// ============================================================================

#[tokio::test]
async fn test_ready_when_models_loaded() {
    let (_fixture, resources) = ready_resources();
    let response = AxumTestRequest::get("/ready")
        .send(health_routes(resources))
        .await;
    assert_eq!(response.status(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_not_ready_reports_load_failure() {
    let response = AxumTestRequest::get("/ready")
        .send(health_routes(unavailable_resources()))
        .await;
    assert_eq!(response.status(), 503);

    let body: Value = response.json();
    assert_eq!(body["status"], "unavailable");
    assert!(body["reason"]
        .as_str()
        .unwrap()
        .contains("/nonexistent/model.json"));
}

#[tokio::test]
async fn test_health_is_mounted_on_full_router() {
    let app = build_router(Arc::new(unavailable_resources()));
    let response = AxumTestRequest::get("/health").send(app).await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = build_router(Arc::new(unavailable_resources()));
    let response = AxumTestRequest::get("/nope").send(app).await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_cors_preflight_allows_post() {
    let app = build_router(Arc::new(unavailable_resources()));
    let response = AxumTestRequest::options("/predict")
        .header("origin", "https://dashboard.example.com")
        .header("access-control-request-method", "POST")
        .send(app)
        .await;
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.header("access-control-allow-origin").as_deref(),
        Some("*")
    );
}
