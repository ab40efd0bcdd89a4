// ABOUTME: Column encoder stored inside classifier artifacts
// ABOUTME: Standardizes numeric columns and one-hot encodes categorical columns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ArtifactError;
use crate::classifier::ClassifierError;
use obesity_core::models::{ColumnKind, FeatureColumn, FeatureRecord, FEATURE_COUNT};
use serde::Deserialize;
use std::collections::HashSet;

/// What to do with a category the encoder never saw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownCategoryPolicy {
    /// Refuse the record
    #[default]
    Error,
    /// Encode as all zeros
    Ignore,
}

/// Encoding of a single column
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColumnEncoding {
    /// `(x - mean) / scale`
    Numeric {
        /// Training mean
        #[serde(default)]
        mean: f64,
        /// Training standard deviation
        #[serde(default = "unit_scale")]
        scale: f64,
    },
    /// One output per category, in listed order
    Categorical {
        /// Categories seen during training
        categories: Vec<String>,
    },
}

const fn unit_scale() -> f64 {
    1.0
}

impl ColumnEncoding {
    const fn kind(&self) -> ColumnKind {
        match self {
            Self::Numeric { .. } => ColumnKind::Numeric,
            Self::Categorical { .. } => ColumnKind::Categorical,
        }
    }

    fn width(&self) -> usize {
        match self {
            Self::Numeric { .. } => 1,
            Self::Categorical { categories } => categories.len(),
        }
    }
}

/// Declared column
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColumnSpec {
    /// Training column name
    pub name: String,
    /// How the column is encoded
    #[serde(flatten)]
    pub encoding: ColumnEncoding,
}

/// Turns a [`FeatureRecord`] into the dense vector a model was fitted on
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Preprocessor {
    /// Columns in training order
    pub columns: Vec<ColumnSpec>,
    /// Unknown category handling
    #[serde(default)]
    pub handle_unknown: UnknownCategoryPolicy,
}

impl Preprocessor {
    /// Check the declared columns against the record schema.
    ///
    /// # Errors
    ///
    /// Returns `ArtifactError::SchemaMismatch` if names, order, or kinds differ,
    /// and `ArtifactError::Malformed` for unusable encodings.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.columns.len() != FEATURE_COUNT {
            return Err(ArtifactError::schema(format!(
                "expected {FEATURE_COUNT} columns, artifact declares {}",
                self.columns.len()
            )));
        }

        for (position, (spec, column)) in self.columns.iter().zip(FeatureColumn::ALL).enumerate() {
            if spec.name != column.name() {
                return Err(ArtifactError::schema(format!(
                    "column {position} is '{}', expected '{column}'",
                    spec.name
                )));
            }
            if spec.encoding.kind() != column.kind() {
                return Err(ArtifactError::schema(format!(
                    "column '{column}' is declared {:?}, expected {:?}",
                    spec.encoding.kind(),
                    column.kind()
                )));
            }
            match &spec.encoding {
                ColumnEncoding::Numeric { mean, scale } => {
                    if !mean.is_finite() || !scale.is_finite() || *scale == 0.0 {
                        return Err(ArtifactError::malformed(format!(
                            "column '{column}' has unusable mean {mean} or scale {scale}"
                        )));
                    }
                }
                ColumnEncoding::Categorical { categories } => {
                    let unique: HashSet<&str> = categories.iter().map(String::as_str).collect();
                    if categories.is_empty() || unique.len() != categories.len() {
                        return Err(ArtifactError::malformed(format!(
                            "column '{column}' needs a non-empty list of distinct categories"
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Width of the encoded vector
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        self.columns.iter().map(|spec| spec.encoding.width()).sum()
    }

    /// Encode one record.
    ///
    /// # Errors
    ///
    /// Returns `ClassifierError::UnknownCategory` for an unseen category under
    /// the `error` policy, and `SchemaMismatch` if a value has the wrong kind.
    pub fn encode(&self, record: &FeatureRecord) -> Result<Vec<f64>, ClassifierError> {
        let mut encoded = Vec::with_capacity(self.encoded_len());
        for (spec, (column, value)) in self.columns.iter().zip(record.iter()) {
            match &spec.encoding {
                ColumnEncoding::Numeric { mean, scale } => {
                    let number = value.as_f64().ok_or_else(|| ClassifierError::SchemaMismatch {
                        column: column.name().to_owned(),
                        reason: format!("expected a number, got '{value}'"),
                    })?;
                    encoded.push((number - mean) / scale);
                }
                ColumnEncoding::Categorical { categories } => {
                    let category =
                        value
                            .as_category()
                            .ok_or_else(|| ClassifierError::SchemaMismatch {
                                column: column.name().to_owned(),
                                reason: format!("expected a category, got {value}"),
                            })?;
                    let hit = categories.iter().position(|known| known == category);
                    if hit.is_none() && self.handle_unknown == UnknownCategoryPolicy::Error {
                        return Err(ClassifierError::UnknownCategory {
                            column: column.name().to_owned(),
                            value: category.to_owned(),
                        });
                    }
                    encoded.extend((0..categories.len()).map(|index| {
                        if Some(index) == hit {
                            1.0
                        } else {
                            0.0
                        }
                    }));
                }
            }
        }
        Ok(encoded)
    }
}
