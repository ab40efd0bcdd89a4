// ABOUTME: Serialized classifier and label encoder artifacts loaded once at startup
// ABOUTME: JSON formats with load-time schema validation against the record columns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Model Artifacts
//!
//! Two files are produced by the training job and read here:
//!
//! - a classifier artifact, tagged by `kind` (`linear` or `tree_ensemble`),
//!   whose `preprocessor` lists the sixteen record columns in order
//! - a label encoder artifact, `{"classes": [...]}`
//!
//! Everything that can be checked without a request is checked at load time:
//! column names and kinds, matrix shapes, tree topology, and that the
//! classifier and encoder agree on the number of classes.

/// Label encoder artifact
pub mod label_encoder;
/// Multinomial linear classifier artifact
pub mod linear;
/// Column encoding shared by every classifier kind
pub mod preprocessor;
/// Decision tree ensemble artifact
pub mod tree;

pub use label_encoder::LabelEncoder;
pub use linear::LinearClassifier;
pub use preprocessor::{ColumnEncoding, ColumnSpec, Preprocessor, UnknownCategoryPolicy};
pub use tree::{DecisionTree, TreeEnsembleClassifier, TreeNode};

use crate::classifier::Classifier;
use crate::prediction::LoadedModels;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Reasons an artifact cannot be loaded
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// File could not be read
    #[error("cannot read artifact {path}: {source}")]
    Io {
        /// Artifact path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },
    /// File is not a valid artifact document
    #[error("cannot parse artifact {path}: {source}")]
    Parse {
        /// Artifact path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },
    /// Declared columns differ from the feature record schema
    #[error("artifact schema does not match the feature record: {reason}")]
    SchemaMismatch {
        /// What differs
        reason: String,
    },
    /// Internally inconsistent artifact
    #[error("malformed artifact: {reason}")]
    Malformed {
        /// What is wrong
        reason: String,
    },
    /// Classifier and label encoder disagree on the class count
    #[error("classifier emits {classifier} classes but label encoder knows {encoder}")]
    ClassCountMismatch {
        /// Classes the classifier can emit
        classifier: usize,
        /// Labels in the encoder
        encoder: usize,
    },
}

impl ArtifactError {
    pub(crate) fn schema(reason: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::Malformed {
            reason: reason.into(),
        }
    }
}

/// Classifier artifact document
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierArtifact {
    /// Multinomial linear model
    Linear(LinearClassifier),
    /// Ensemble of decision trees
    TreeEnsemble(TreeEnsembleClassifier),
}

impl ClassifierArtifact {
    /// Validate and turn into a shareable classifier.
    ///
    /// # Errors
    ///
    /// Returns an `ArtifactError` if the artifact is inconsistent.
    pub fn into_classifier(self) -> Result<Arc<dyn Classifier>, ArtifactError> {
        match self {
            Self::Linear(model) => {
                model.validate()?;
                Ok(Arc::new(model))
            }
            Self::TreeEnsemble(model) => {
                model.validate()?;
                Ok(Arc::new(model))
            }
        }
    }
}

/// Where the two artifacts live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// Classifier artifact
    pub model: PathBuf,
    /// Label encoder artifact
    pub label_encoder: PathBuf,
}

impl ArtifactPaths {
    /// Paths for a classifier and its label encoder
    #[must_use]
    pub fn new(model: impl Into<PathBuf>, label_encoder: impl Into<PathBuf>) -> Self {
        Self {
            model: model.into(),
            label_encoder: label_encoder.into(),
        }
    }
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let bytes = fs::read(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate a classifier artifact.
///
/// # Errors
///
/// Returns an `ArtifactError` if the file is missing, unparsable, or invalid.
pub fn load_classifier(path: &Path) -> Result<Arc<dyn Classifier>, ArtifactError> {
    let classifier = read_document::<ClassifierArtifact>(path)?.into_classifier()?;
    debug!(path = %path.display(), model = %classifier.describe(), "classifier artifact parsed");
    Ok(classifier)
}

/// Load and validate a label encoder artifact.
///
/// # Errors
///
/// Returns an `ArtifactError` if the file is missing, unparsable, or invalid.
pub fn load_label_encoder(path: &Path) -> Result<LabelEncoder, ArtifactError> {
    let encoder = read_document::<LabelEncoder>(path)?;
    encoder.validate()?;
    debug!(
        path = %path.display(),
        classes = encoder.classes().len(),
        "label encoder artifact parsed"
    );
    Ok(encoder)
}

/// Load both artifacts and check that they agree.
///
/// # Errors
///
/// Returns an `ArtifactError` if either artifact fails to load or the class
/// counts differ.
pub fn load_models(paths: &ArtifactPaths) -> Result<LoadedModels, ArtifactError> {
    let classifier = load_classifier(&paths.model)?;
    let encoder = load_label_encoder(&paths.label_encoder)?;
    LoadedModels::checked(classifier, Arc::new(encoder))
}
