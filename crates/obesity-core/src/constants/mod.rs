// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Field domains, BMI thresholds, category colors, and form defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain rather than kept in one flat list.

/// Category display colors
pub mod colors;

pub use colors::*;

/// Inclusive bounds for every numeric survey field
pub mod domains {
    /// Minimum age in years
    pub const AGE_MIN: i64 = 1;
    /// Maximum age in years
    pub const AGE_MAX: i64 = 120;
    /// Minimum height in meters
    pub const HEIGHT_MIN_M: f64 = 0.5;
    /// Maximum height in meters
    pub const HEIGHT_MAX_M: f64 = 2.5;
    /// Minimum weight in kilograms
    pub const WEIGHT_MIN_KG: f64 = 10.0;
    /// Maximum weight in kilograms
    pub const WEIGHT_MAX_KG: f64 = 300.0;
    /// Vegetable consumption level (FCVC)
    pub const FCVC_RANGE: (i64, i64) = (1, 3);
    /// Main meals per day (NCP)
    pub const NCP_RANGE: (i64, i64) = (1, 4);
    /// Water intake level (CH2O)
    pub const CH2O_RANGE: (i64, i64) = (1, 3);
    /// Physical activity frequency (FAF)
    pub const FAF_RANGE: (i64, i64) = (0, 3);
    /// Technology use time (TUE)
    pub const TUE_RANGE: (i64, i64) = (0, 2);
}

/// BMI status thresholds (lower bound inclusive)
pub mod bmi {
    /// Below this value the status is Underweight
    pub const NORMAL_LOWER: f64 = 18.5;
    /// At or above this value the status is Overweight
    pub const OVERWEIGHT_LOWER: f64 = 25.0;
    /// At or above this value the status is Obese
    pub const OBESE_LOWER: f64 = 30.0;
}

/// Default values pre-filled in the input form
pub mod form_defaults {
    /// Default age in years
    pub const AGE: i64 = 21;
    /// Default height in meters
    pub const HEIGHT_M: f64 = 1.70;
    /// Default weight in kilograms
    pub const WEIGHT_KG: f64 = 70.0;
    /// Height input step
    pub const HEIGHT_STEP: f64 = 0.01;
    /// Weight input step
    pub const WEIGHT_STEP: f64 = 0.1;
    /// Default FCVC
    pub const FCVC: i64 = 2;
    /// Default NCP
    pub const NCP: i64 = 3;
    /// Default CH2O
    pub const CH2O: i64 = 2;
    /// Default FAF
    pub const FAF: i64 = 1;
    /// Default TUE
    pub const TUE: i64 = 1;
}

/// Service identifiers used in logs
pub mod service_names {
    /// HTTP prediction server
    pub const OBESITY_INSIGHT_SERVER: &str = "obesity-insight-server";
    /// Command-line client
    pub const OBESITY_CLI: &str = "obesity-cli";
}
