// ABOUTME: Request tracing for correlation and structured logging
// ABOUTME: Builds one span per HTTP request carrying the propagated request id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::defaults;
use axum::body::Body;
use http::{HeaderValue, Request, Response};
use std::time::Duration;
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::field::Empty;
use tracing::{info, info_span, Span};
use uuid::Uuid;

/// Generates `req_<uuid>` ids for requests that arrive without one
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestIdGenerator;

impl MakeRequestId for RequestIdGenerator {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&format!("req_{}", Uuid::new_v4().simple()))
            .ok()
            .map(RequestId::new)
    }
}

/// Request id set by `SetRequestIdLayer`, or `-` when absent
#[must_use]
pub fn request_id<B>(request: &Request<B>) -> &str {
    request
        .headers()
        .get(defaults::REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
}

/// Create a tracing span for HTTP requests
pub fn create_request_span(request: &Request<Body>) -> Span {
    info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id(request),
        status_code = Empty,
        duration_ms = Empty,
    )
}

/// Create a tracing span for one pipeline run
pub fn create_prediction_span(operation: &str) -> Span {
    info_span!(
        "prediction",
        operation = %operation,
        label = Empty,
        duration_ms = Empty,
    )
}

/// Record the response on the request span and emit the access log line
pub fn record_response(response: &Response<Body>, latency: Duration, span: &Span) {
    let status = response.status().as_u16();
    let duration_ms = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
    span.record("status_code", status);
    span.record("duration_ms", duration_ms);
    info!(
        parent: span,
        http.status = status,
        http.duration_ms = duration_ms,
        "HTTP request"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_prefixed_and_unique() {
        let request = Request::new(());
        let mut generator = RequestIdGenerator;
        let first = generator.make_request_id(&request).unwrap();
        let second = generator.make_request_id(&request).unwrap();
        let first = first.header_value().to_str().unwrap();
        assert!(first.starts_with("req_"));
        assert_eq!(first.len(), 4 + 32);
        assert_ne!(first, second.header_value().to_str().unwrap());
    }

    #[test]
    fn test_request_id_reads_header() {
        let request = Request::builder()
            .header(defaults::REQUEST_ID_HEADER, "req-7")
            .body(())
            .unwrap();
        assert_eq!(request_id(&request), "req-7");
        assert_eq!(request_id(&Request::new(())), "-");
    }
}
