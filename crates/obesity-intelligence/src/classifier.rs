// ABOUTME: Capabilities the pipeline needs from a trained model and its label encoder
// ABOUTME: Classifier maps a record to a class id, LabelDecoder maps the id to a label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Classifier Seams
//!
//! The pipeline never sees a concrete model. Anything that can map a
//! [`FeatureRecord`] to a [`ClassId`] is a [`Classifier`], anything that can
//! map a [`ClassId`] back to a label is a [`LabelDecoder`]. Both are loaded once
//! and shared read-only across requests, hence `Send + Sync`.

use obesity_core::errors::PipelineError;
use obesity_core::models::{ClassId, FeatureRecord};
use thiserror::Error;

/// Reasons a classifier or decoder rejects a request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifierError {
    /// The record does not have the shape the model was trained on
    #[error("schema mismatch on column '{column}': {reason}")]
    SchemaMismatch {
        /// Column name
        column: String,
        /// What did not match
        reason: String,
    },
    /// A categorical value was never seen during training
    #[error("unknown category '{value}' for column '{column}'")]
    UnknownCategory {
        /// Column name
        column: String,
        /// Submitted value
        value: String,
    },
    /// The decoder has no label for this class id
    #[error("class id {class_id} is outside the {known} known classes")]
    UnknownClass {
        /// Id returned by the classifier
        class_id: ClassId,
        /// Number of labels the decoder knows
        known: usize,
    },
    /// The model produced no usable score
    #[error("model produced no usable score: {reason}")]
    Degenerate {
        /// Details
        reason: String,
    },
}

impl From<ClassifierError> for PipelineError {
    fn from(error: ClassifierError) -> Self {
        Self::prediction(error.to_string())
    }
}

/// A trained model that assigns one class to a record
pub trait Classifier: Send + Sync {
    /// Predict the class of a single record.
    ///
    /// # Errors
    ///
    /// Returns a `ClassifierError` if the record cannot be scored.
    fn predict(&self, record: &FeatureRecord) -> Result<ClassId, ClassifierError>;

    /// Number of classes the model can emit, if known
    fn class_count(&self) -> Option<usize> {
        None
    }

    /// Short description for logs
    fn describe(&self) -> String {
        "classifier".to_owned()
    }
}

/// Maps class identifiers back to category labels
pub trait LabelDecoder: Send + Sync {
    /// Decode one class id.
    ///
    /// # Errors
    ///
    /// Returns `ClassifierError::UnknownClass` if the id has no label.
    fn decode(&self, class_id: ClassId) -> Result<String, ClassifierError>;

    /// Number of labels, if known
    fn class_count(&self) -> Option<usize> {
        None
    }
}
