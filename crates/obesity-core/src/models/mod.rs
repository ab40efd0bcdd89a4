// ABOUTME: Core data models for the obesity insight service
// ABOUTME: Re-exports survey enums, raw input, feature record, results, and form schema
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `RawInput`: untrusted survey answers as submitted
//! - `FeatureRecord`: validated row in classifier training order
//! - `BmiResult`, `PredictionResult`: pipeline outputs
//! - `PredictionReport`: what a renderer consumes
//! - `FieldSpec`: form description for input surfaces

mod bmi;
mod form;
mod input;
mod prediction;
mod record;
mod report;
mod survey;

pub use bmi::{BmiResult, BmiStatus};
pub use form::{field_spec, form_schema, FieldDomain, FieldSpec};
pub use input::{BmiRequest, RawInput};
pub use prediction::{ClassId, ObesityCategory, PredictionResult};
pub use record::{ColumnKind, FeatureColumn, FeatureRecord, FeatureValue, FEATURE_COUNT};
pub use report::{DashboardHighlights, PredictionReport};
pub use survey::{Choice, Frequency, Gender, Transport, YesNo};
