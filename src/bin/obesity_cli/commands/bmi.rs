// ABOUTME: BMI command for obesity-cli
// ABOUTME: Computes BMI and its status without loading any model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use obesity_insight_server::formatters::OutputFormat;
use obesity_intelligence::PredictionPipeline;

use crate::helpers::display::print_formatted;

pub fn run(height: f64, weight: f64, format: OutputFormat) -> Result<()> {
    let bmi = PredictionPipeline::evaluate_bmi(height, weight)?;
    print_formatted(&bmi, format)
}
