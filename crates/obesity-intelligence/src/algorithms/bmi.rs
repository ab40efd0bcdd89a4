// ABOUTME: Body-mass-index rule evaluator: weight over height squared, bucketed
// ABOUTME: Rejects non-positive or non-finite height and weight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use obesity_core::errors::PipelineError;
use obesity_core::models::{BmiResult, BmiStatus};

/// Compute BMI (`weight / height^2`) and its status.
///
/// # Errors
///
/// Returns `PipelineError::InvalidArgument` if height or weight is not a
/// finite positive number.
pub fn evaluate(height: f64, weight: f64) -> Result<BmiResult, PipelineError> {
    if !height.is_finite() || height <= 0.0 {
        return Err(PipelineError::invalid_argument(
            "height",
            format!("must be a positive number of meters, got {height}"),
        ));
    }
    if !weight.is_finite() || weight <= 0.0 {
        return Err(PipelineError::invalid_argument(
            "weight",
            format!("must be a positive number of kilograms, got {weight}"),
        ));
    }

    let value = weight / (height * height);
    Ok(BmiResult {
        value,
        status: BmiStatus::from_bmi(value),
    })
}
