// ABOUTME: Raw survey input exactly as submitted by a form, CLI, or API client
// ABOUTME: Unvalidated values; the feature record builder is the trust boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::form_defaults;
use crate::models::survey::{Choice, Frequency, Gender, Transport, YesNo};
use serde::{Deserialize, Serialize};

/// Every field collected from the user.
///
/// Categorical answers are kept as the submitted text so that the builder can
/// report the offending field by name instead of failing inside the JSON
/// decoder. All fields are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    /// `Male` or `Female`
    pub gender: String,
    /// Years, 1 to 120
    pub age: i64,
    /// Meters, 0.5 to 2.5
    pub height: f64,
    /// Kilograms, 10 to 300
    pub weight: f64,
    /// Family history with overweight (`yes` / `no`)
    pub family_history: String,
    /// Frequent consumption of high caloric food (`yes` / `no`)
    pub favc: String,
    /// Vegetable consumption level, 1 to 3
    pub fcvc: i64,
    /// Main meals per day, 1 to 4
    pub ncp: i64,
    /// Eating between meals
    pub caec: String,
    /// Smoker (`yes` / `no`)
    pub smoke: String,
    /// Water intake level, 1 to 3
    pub ch2o: i64,
    /// Calorie consumption monitoring (`yes` / `no`)
    pub scc: String,
    /// Physical activity frequency, 0 to 3
    pub faf: i64,
    /// Time using technology devices, 0 to 2
    pub tue: i64,
    /// Alcohol consumption
    pub calc: String,
    /// Usual transportation mode
    pub mtrans: String,
}

impl Default for RawInput {
    /// The values the input form shows before the user touches anything
    fn default() -> Self {
        Self {
            gender: Gender::Male.as_str().to_owned(),
            age: form_defaults::AGE,
            height: form_defaults::HEIGHT_M,
            weight: form_defaults::WEIGHT_KG,
            family_history: YesNo::Yes.as_str().to_owned(),
            favc: YesNo::Yes.as_str().to_owned(),
            fcvc: form_defaults::FCVC,
            ncp: form_defaults::NCP,
            caec: Frequency::Never.as_str().to_owned(),
            smoke: YesNo::Yes.as_str().to_owned(),
            ch2o: form_defaults::CH2O,
            scc: YesNo::Yes.as_str().to_owned(),
            faf: form_defaults::FAF,
            tue: form_defaults::TUE,
            calc: Frequency::Never.as_str().to_owned(),
            mtrans: Transport::PublicTransportation.as_str().to_owned(),
        }
    }
}

/// Body of a BMI-only request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiRequest {
    /// Meters
    pub height: f64,
    /// Kilograms
    pub weight: f64,
}
