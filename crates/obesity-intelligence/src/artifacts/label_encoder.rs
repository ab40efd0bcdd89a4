// ABOUTME: Label encoder artifact mapping class ids to category labels
// ABOUTME: Class id N is the Nth entry of the fitted class list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ArtifactError;
use crate::classifier::{ClassifierError, LabelDecoder};
use obesity_core::models::ClassId;
use serde::Deserialize;
use std::collections::HashSet;

/// Fitted class list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Build and validate an encoder from its class list.
    ///
    /// # Errors
    ///
    /// Returns `ArtifactError::Malformed` if the list is empty or repeats a label.
    pub fn new(classes: Vec<String>) -> Result<Self, ArtifactError> {
        let encoder = Self { classes };
        encoder.validate()?;
        Ok(encoder)
    }

    /// Check the class list.
    ///
    /// # Errors
    ///
    /// Returns `ArtifactError::Malformed` if the list is empty or repeats a label.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.classes.is_empty() {
            return Err(ArtifactError::malformed("label encoder has no classes"));
        }
        let unique: HashSet<&String> = self.classes.iter().collect();
        if unique.len() != self.classes.len() {
            return Err(ArtifactError::malformed("label encoder repeats a class"));
        }
        Ok(())
    }

    /// Labels in class id order
    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

impl LabelDecoder for LabelEncoder {
    fn decode(&self, class_id: ClassId) -> Result<String, ClassifierError> {
        usize::try_from(class_id)
            .ok()
            .and_then(|index| self.classes.get(index))
            .cloned()
            .ok_or_else(|| ClassifierError::UnknownClass {
                class_id,
                known: self.classes.len(),
            })
    }

    fn class_count(&self) -> Option<usize> {
        Some(self.classes.len())
    }
}
