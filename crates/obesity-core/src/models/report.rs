// ABOUTME: Everything a renderer needs to present one prediction
// ABOUTME: Prediction result, BMI, dashboard highlights, and the echoed input record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::models::bmi::{BmiResult, BmiStatus};
use crate::models::prediction::PredictionResult;
use crate::models::record::FeatureRecord;
use crate::models::survey::Gender;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Dashboard metric cards shown next to the prediction
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DashboardHighlights {
    /// BMI rounded to two decimals
    pub bmi: f64,
    /// BMI status
    pub bmi_status: BmiStatus,
    /// Age in years
    pub age: i64,
    /// Gender
    pub gender: Gender,
    /// Main meals per day (NCP)
    pub meals_per_day: i64,
    /// Water intake level (CH2O)
    pub water_intake: i64,
    /// Physical activity frequency (FAF)
    pub physical_activity: i64,
}

impl DashboardHighlights {
    /// Derive the cards from a record and its BMI
    #[must_use]
    pub fn new(record: &FeatureRecord, bmi: &BmiResult) -> Self {
        Self {
            bmi: bmi.rounded(),
            bmi_status: bmi.status,
            age: record.age,
            gender: record.gender,
            meals_per_day: record.ncp,
            water_intake: record.ch2o,
            physical_activity: record.faf,
        }
    }
}

/// Complete outcome of one prediction request.
///
/// Serializes flat: `predicted_class_id`, `predicted_label`, `display_color`,
/// then `bmi`, `highlights`, `input`, `generated_at`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionReport {
    /// Classifier output
    #[serde(flatten)]
    pub prediction: PredictionResult,
    /// BMI derived from the same input
    pub bmi: BmiResult,
    /// Dashboard metric cards
    pub highlights: DashboardHighlights,
    /// Echo of the record sent to the classifier
    pub input: FeatureRecord,
    /// When the report was produced
    pub generated_at: DateTime<Utc>,
}

impl PredictionReport {
    /// Assemble a report, stamping the current time
    #[must_use]
    pub fn new(prediction: PredictionResult, bmi: BmiResult, input: FeatureRecord) -> Self {
        let highlights = DashboardHighlights::new(&input, &bmi);
        Self {
            prediction,
            bmi,
            highlights,
            input,
            generated_at: Utc::now(),
        }
    }
}
