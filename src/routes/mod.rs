// ABOUTME: Route module organization for the Obesity Insight HTTP endpoints
// ABOUTME: Health and readiness probes plus the prediction, BMI, and schema endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Each domain module contains only route definitions and thin handlers that
//! delegate to the prediction pipeline.

/// Health check and readiness routes
pub mod health;
/// Prediction, BMI, and form schema routes
pub mod predict;

/// Health check route handlers
pub use health::HealthRoutes;
/// Prediction route handlers
pub use predict::PredictRoutes;
