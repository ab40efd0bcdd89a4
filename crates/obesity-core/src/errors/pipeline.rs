// ABOUTME: Error taxonomy raised by the prediction pipeline stages
// ABOUTME: Validation, invalid argument, model unavailable, and prediction failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Pipeline Error Types
//!
//! - `Validation` and `InvalidArgument` are caught closest to input collection
//! - `ModelUnavailable` and `Prediction` propagate to the presenter
//!
//! All four convert into [`AppError`] for HTTP responses.

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Errors raised while turning raw input into a prediction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// A raw field is outside its declared domain
    #[error("field '{field}' is invalid: {reason}")]
    Validation {
        /// Name of the offending `RawInput` field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
    /// Degenerate arguments to the BMI rule
    #[error("invalid argument '{argument}': {reason}")]
    InvalidArgument {
        /// Name of the argument
        argument: &'static str,
        /// Why the value was rejected
        reason: String,
    },
    /// Classifier or label encoder failed to load at startup
    #[error("prediction model unavailable: {reason}")]
    ModelUnavailable {
        /// Load failure reported at startup
        reason: String,
    },
    /// Classifier or decoder rejected the record
    #[error("prediction failed: {reason}")]
    Prediction {
        /// Rejection reported by the classifier or decoder
        reason: String,
    },
}

impl PipelineError {
    /// Field outside its domain
    #[must_use]
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Degenerate calculation argument
    #[must_use]
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// Model artifacts are not loaded
    #[must_use]
    pub fn model_unavailable(reason: impl Into<String>) -> Self {
        Self::ModelUnavailable {
            reason: reason.into(),
        }
    }

    /// Classifier or decoder rejection
    #[must_use]
    pub fn prediction(reason: impl Into<String>) -> Self {
        Self::Prediction {
            reason: reason.into(),
        }
    }

    /// Error code this failure maps to
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Validation { .. } => ErrorCode::ValueOutOfRange,
            Self::InvalidArgument { .. } => ErrorCode::InvalidArgument,
            Self::ModelUnavailable { .. } => ErrorCode::ModelUnavailable,
            Self::Prediction { .. } => ErrorCode::PredictionFailed,
        }
    }
}

impl From<PipelineError> for AppError {
    fn from(error: PipelineError) -> Self {
        let details = match &error {
            PipelineError::Validation { field, reason } => {
                serde_json::json!({ "field": field, "reason": reason })
            }
            PipelineError::InvalidArgument { argument, reason } => {
                serde_json::json!({ "argument": argument, "reason": reason })
            }
            PipelineError::ModelUnavailable { .. } | PipelineError::Prediction { .. } => {
                serde_json::Value::Null
            }
        };
        Self::new(error.code(), error.to_string()).with_details(details)
    }
}
