// ABOUTME: HTTP middleware for cross-origin access and request tracing
// ABOUTME: Provides the CORS layer and request-id aware spans for structured logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS configuration
pub mod cors;
/// Request spans and access logging
pub mod request_tracing;

pub use cors::setup_cors;
pub use request_tracing::{
    create_prediction_span, create_request_span, record_response, request_id, RequestIdGenerator,
};
