// ABOUTME: Prediction route handlers: full prediction, live BMI, and the input form schema
// ABOUTME: Thin handlers that delegate to the pipeline and render through the presenters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Prediction routes
//!
//! Bodies are decoded with `Result<Json<_>, JsonRejection>` so that malformed
//! JSON, missing fields and wrong types come back as `INVALID_INPUT` in the
//! same error envelope as domain failures.

use crate::formatters::{format_output, OutputFormat, TextSummary};
use crate::logging::AppLogger;
use crate::middleware::create_prediction_span;
use crate::resources::ServerResources;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use obesity_core::errors::{AppError, ErrorCode};
use obesity_core::models::{form_schema, BmiRequest, RawInput};
use obesity_intelligence::PredictionPipeline;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;

/// `?format=json|text`
#[derive(Debug, Deserialize)]
struct FormatQuery {
    format: Option<String>,
}

impl FormatQuery {
    fn output_format(&self) -> OutputFormat {
        self.format
            .as_deref()
            .map_or(OutputFormat::Json, OutputFormat::from_str_param)
    }
}

/// Prediction routes
pub struct PredictRoutes;

impl PredictRoutes {
    /// Create all prediction routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/predict", post(Self::handle_predict))
            .route("/bmi", post(Self::handle_bmi))
            .route("/schema", get(Self::handle_schema))
            .with_state(resources)
    }

    /// Run the full pipeline on one survey submission
    async fn handle_predict(
        State(resources): State<Arc<ServerResources>>,
        Query(query): Query<FormatQuery>,
        payload: Result<Json<RawInput>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(raw) = payload.map_err(|r| rejection_to_error(&r))?;

        let span = create_prediction_span("predict");
        let started = Instant::now();
        let outcome = span.in_scope(|| resources.pipeline.run(&raw));
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        span.record("duration_ms", duration_ms);

        let report = outcome.map_err(|e| {
            AppLogger::log_rejected_input(&e);
            AppError::from(e)
        })?;

        span.record("label", report.prediction.predicted_label.as_str());
        AppLogger::log_prediction(
            &report.prediction.predicted_label,
            report.prediction.predicted_class_id,
            report.bmi.rounded(),
            duration_ms,
        );
        render(&report, query.output_format())
    }

    /// BMI only, recomputed as the form changes
    async fn handle_bmi(
        Query(query): Query<FormatQuery>,
        payload: Result<Json<BmiRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = payload.map_err(|r| rejection_to_error(&r))?;
        let bmi = PredictionPipeline::evaluate_bmi(request.height, request.weight).map_err(|e| {
            AppLogger::log_rejected_input(&e);
            AppError::from(e)
        })?;
        render(&bmi, query.output_format())
    }

    /// Every input field with its domain and default value
    async fn handle_schema(Query(query): Query<FormatQuery>) -> Result<Response, AppError> {
        render(&form_schema(), query.output_format())
    }
}

fn rejection_to_error(rejection: &JsonRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::new(ErrorCode::PayloadTooLarge, rejection.body_text());
    }
    AppError::invalid_input(rejection.body_text())
}

fn render<T: Serialize + TextSummary>(
    value: &T,
    format: OutputFormat,
) -> Result<Response, AppError> {
    let output = format_output(value, format)?;
    Ok((
        StatusCode::OK,
        [(CONTENT_TYPE, output.content_type)],
        output.data,
    )
        .into_response())
}
