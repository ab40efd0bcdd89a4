// ABOUTME: Core types and constants for the obesity insight prediction service
// ABOUTME: Foundation crate with error handling, survey models, record schema, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Obesity Core
//!
//! Foundation crate providing shared types and constants for the obesity
//! insight service. It has no knowledge of classifiers or HTTP routing, so the
//! pipeline crate and the server crate can both depend on it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `PipelineError`
//! - **constants**: Field domains, BMI thresholds, category colors, and defaults
//! - **models**: Survey enums, `RawInput`, `FeatureRecord`, results, and the form schema

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (survey answers, feature record, prediction results)
pub mod models;
