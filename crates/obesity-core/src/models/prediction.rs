// ABOUTME: Obesity category labels, their display colors, and the prediction result
// ABOUTME: The category-to-color table is total: unknown labels fall back to a default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::colors::{
    DEFAULT_CATEGORY_COLOR, INSUFFICIENT_WEIGHT_COLOR, NORMAL_WEIGHT_COLOR,
    OBESITY_TYPE_III_COLOR, OBESITY_TYPE_II_COLOR, OBESITY_TYPE_I_COLOR,
    OVERWEIGHT_LEVEL_II_COLOR, OVERWEIGHT_LEVEL_I_COLOR,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Class identifier produced by a classifier
pub type ClassId = u32;

/// Categories the classifier was trained to recognize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObesityCategory {
    /// `Insufficient_Weight`
    #[serde(rename = "Insufficient_Weight")]
    InsufficientWeight,
    /// `Normal_Weight`
    #[serde(rename = "Normal_Weight")]
    NormalWeight,
    /// `Overweight_Level_I`
    #[serde(rename = "Overweight_Level_I")]
    OverweightLevelI,
    /// `Overweight_Level_II`
    #[serde(rename = "Overweight_Level_II")]
    OverweightLevelII,
    /// `Obesity_Type_I`
    #[serde(rename = "Obesity_Type_I")]
    ObesityTypeI,
    /// `Obesity_Type_II`
    #[serde(rename = "Obesity_Type_II")]
    ObesityTypeII,
    /// `Obesity_Type_III`
    #[serde(rename = "Obesity_Type_III")]
    ObesityTypeIII,
}

impl ObesityCategory {
    /// Every known category, from lightest to heaviest
    pub const ALL: [Self; 7] = [
        Self::InsufficientWeight,
        Self::NormalWeight,
        Self::OverweightLevelI,
        Self::OverweightLevelII,
        Self::ObesityTypeI,
        Self::ObesityTypeII,
        Self::ObesityTypeIII,
    ];

    /// Label spelling produced by the label encoder
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::InsufficientWeight => "Insufficient_Weight",
            Self::NormalWeight => "Normal_Weight",
            Self::OverweightLevelI => "Overweight_Level_I",
            Self::OverweightLevelII => "Overweight_Level_II",
            Self::ObesityTypeI => "Obesity_Type_I",
            Self::ObesityTypeII => "Obesity_Type_II",
            Self::ObesityTypeIII => "Obesity_Type_III",
        }
    }

    /// Designated display color
    #[must_use]
    pub const fn display_color(&self) -> &'static str {
        match self {
            Self::InsufficientWeight => INSUFFICIENT_WEIGHT_COLOR,
            Self::NormalWeight => NORMAL_WEIGHT_COLOR,
            Self::OverweightLevelI => OVERWEIGHT_LEVEL_I_COLOR,
            Self::OverweightLevelII => OVERWEIGHT_LEVEL_II_COLOR,
            Self::ObesityTypeI => OBESITY_TYPE_I_COLOR,
            Self::ObesityTypeII => OBESITY_TYPE_II_COLOR,
            Self::ObesityTypeIII => OBESITY_TYPE_III_COLOR,
        }
    }

    /// Parse an exact label spelling
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|category| category.label() == label)
    }

    /// Color for any decoder label; never fails
    #[must_use]
    pub fn color_for_label(label: &str) -> &'static str {
        Self::from_label(label).map_or(DEFAULT_CATEGORY_COLOR, |category| {
            category.display_color()
        })
    }
}

impl fmt::Display for ObesityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifier output decoded for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Raw class identifier from the classifier
    pub predicted_class_id: ClassId,
    /// Label decoded from the class identifier
    pub predicted_label: String,
    /// Hex color for the label
    pub display_color: String,
}
