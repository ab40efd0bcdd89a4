// ABOUTME: Deterministic health algorithms used alongside the classifier
// ABOUTME: Contains the BMI rule evaluator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Body-mass-index calculation and status bucketing
pub mod bmi;

pub use bmi::evaluate;
