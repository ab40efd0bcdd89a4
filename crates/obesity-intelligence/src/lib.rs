// ABOUTME: Prediction pipeline for the obesity insight service
// ABOUTME: BMI rule, feature record builder, classifier seams, artifacts, and invoker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Obesity Intelligence
//!
//! The prediction request pipeline:
//!
//! 1. [`features::FeatureRecordBuilder`] validates a `RawInput` into a `FeatureRecord`
//! 2. [`algorithms::bmi::evaluate`] derives BMI and its status
//! 3. [`prediction::PredictionInvoker`] runs the classifier and label decoder
//! 4. [`pipeline::PredictionPipeline`] assembles a `PredictionReport`
//!
//! Classifiers and decoders sit behind the [`classifier::Classifier`] and
//! [`classifier::LabelDecoder`] traits. [`artifacts`] provides JSON-backed
//! implementations loaded once at startup.

/// Deterministic health algorithms (BMI)
pub mod algorithms;

/// Serialized classifier and label encoder artifacts
pub mod artifacts;

/// Classifier and label decoder capabilities
pub mod classifier;

/// Raw input validation into the canonical feature record
pub mod features;

/// End-to-end request pipeline
pub mod pipeline;

/// Model state and prediction invocation
pub mod prediction;

pub use algorithms::bmi::evaluate as evaluate_bmi;
pub use classifier::{Classifier, ClassifierError, LabelDecoder};
pub use features::FeatureRecordBuilder;
pub use pipeline::PredictionPipeline;
pub use prediction::{LoadedModels, ModelState, PredictionInvoker};
