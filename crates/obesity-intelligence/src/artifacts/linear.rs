// ABOUTME: Multinomial linear classifier: one weight row and intercept per class
// ABOUTME: Predicts the class with the highest score, first class wins ties
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{ArtifactError, Preprocessor};
use crate::classifier::{Classifier, ClassifierError};
use obesity_core::models::{ClassId, FeatureRecord};
use serde::Deserialize;

/// Linear model over the encoded feature vector
#[derive(Debug, Clone, Deserialize)]
pub struct LinearClassifier {
    /// Column encoder
    pub preprocessor: Preprocessor,
    /// One row per class, one weight per encoded feature
    pub coefficients: Vec<Vec<f64>>,
    /// One intercept per class
    pub intercepts: Vec<f64>,
}

impl LinearClassifier {
    /// Check that the weight matrix matches the encoder and class count.
    ///
    /// # Errors
    ///
    /// Returns an `ArtifactError` describing the first inconsistency.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        self.preprocessor.validate()?;
        if self.coefficients.is_empty() {
            return Err(ArtifactError::malformed("linear model has no classes"));
        }
        if self.intercepts.len() != self.coefficients.len() {
            return Err(ArtifactError::malformed(format!(
                "{} coefficient rows but {} intercepts",
                self.coefficients.len(),
                self.intercepts.len()
            )));
        }
        let width = self.preprocessor.encoded_len();
        if let Some((class, row)) = self
            .coefficients
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != width)
        {
            return Err(ArtifactError::malformed(format!(
                "coefficient row {class} has {} weights, encoder produces {width}",
                row.len()
            )));
        }
        let finite = self
            .coefficients
            .iter()
            .flatten()
            .chain(&self.intercepts)
            .all(|weight| weight.is_finite());
        if !finite {
            return Err(ArtifactError::malformed("non-finite weight"));
        }
        Ok(())
    }

    /// Per-class scores for an encoded vector
    #[must_use]
    pub fn scores(&self, encoded: &[f64]) -> Vec<f64> {
        self.coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(row, intercept)| {
                row.iter()
                    .zip(encoded)
                    .map(|(weight, x)| weight * x)
                    .sum::<f64>()
                    + intercept
            })
            .collect()
    }
}

/// Index of the largest score, first one on ties.
pub(crate) fn argmax(scores: &[f64]) -> Result<ClassId, ClassifierError> {
    let mut best: Option<(usize, f64)> = None;
    for (index, &score) in scores.iter().enumerate() {
        if score.is_nan() {
            return Err(ClassifierError::Degenerate {
                reason: format!("score for class {index} is NaN"),
            });
        }
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((index, score)),
        }
    }
    let (index, _) = best.ok_or_else(|| ClassifierError::Degenerate {
        reason: "no classes to score".to_owned(),
    })?;
    ClassId::try_from(index).map_err(|_| ClassifierError::Degenerate {
        reason: format!("class index {index} does not fit a class id"),
    })
}

impl Classifier for LinearClassifier {
    fn predict(&self, record: &FeatureRecord) -> Result<ClassId, ClassifierError> {
        let encoded = self.preprocessor.encode(record)?;
        argmax(&self.scores(&encoded))
    }

    fn class_count(&self) -> Option<usize> {
        Some(self.coefficients.len())
    }

    fn describe(&self) -> String {
        format!(
            "linear ({} classes, {} encoded features)",
            self.coefficients.len(),
            self.preprocessor.encoded_len()
        )
    }
}
