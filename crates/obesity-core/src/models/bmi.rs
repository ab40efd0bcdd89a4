// ABOUTME: Body-mass-index result and its four-way status bucket
// ABOUTME: Pure derived values recomputed whenever height or weight change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::bmi::{NORMAL_LOWER, OBESE_LOWER, OVERWEIGHT_LOWER};
use serde::{Deserialize, Serialize};
use std::fmt;

/// BMI status bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiStatus {
    /// BMI below 18.5
    Underweight,
    /// BMI in [18.5, 25)
    Normal,
    /// BMI in [25, 30)
    Overweight,
    /// BMI of 30 or more
    Obese,
}

impl BmiStatus {
    /// Bucket a BMI value; lower bounds are inclusive
    #[must_use]
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < NORMAL_LOWER {
            Self::Underweight
        } else if bmi < OVERWEIGHT_LOWER {
            Self::Normal
        } else if bmi < OBESE_LOWER {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Display name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// BMI value and its status
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// weight / height^2, unrounded
    pub value: f64,
    /// Status bucket for `value`
    pub status: BmiStatus,
}

impl BmiResult {
    /// Value rounded to two decimals, as shown on the dashboard
    #[must_use]
    pub fn rounded(&self) -> f64 {
        (self.value * 100.0).round() / 100.0
    }
}

impl fmt::Display for BmiResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} ({})", self.value, self.status)
    }
}
