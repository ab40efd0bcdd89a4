// ABOUTME: Decision tree ensemble classifier over the encoded feature vector
// ABOUTME: Sums per-class leaf distributions across trees and takes the argmax
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::linear::argmax;
use super::{ArtifactError, Preprocessor};
use crate::classifier::{Classifier, ClassifierError};
use obesity_core::models::{ClassId, FeatureRecord};
use serde::Deserialize;

/// Node of a flattened tree; node 0 is the root
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Go left when `x[feature] <= threshold`
    Split {
        /// Encoded feature index
        feature: usize,
        /// Split threshold
        threshold: f64,
        /// Node index taken when the test holds
        left: usize,
        /// Node index taken otherwise
        right: usize,
    },
    /// Per-class weights
    Leaf {
        /// One value per class
        value: Vec<f64>,
    },
}

/// One tree
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DecisionTree {
    /// Nodes, children always after their parent
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    fn validate(&self, tree: usize, width: usize, n_classes: usize) -> Result<(), ArtifactError> {
        if self.nodes.is_empty() {
            return Err(ArtifactError::malformed(format!("tree {tree} has no nodes")));
        }
        for (index, node) in self.nodes.iter().enumerate() {
            match node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if *feature >= width || !threshold.is_finite() {
                        return Err(ArtifactError::malformed(format!(
                            "tree {tree} node {index} splits on feature {feature} at {threshold}"
                        )));
                    }
                    let forward = |child: usize| child > index && child < self.nodes.len();
                    if !forward(*left) || !forward(*right) {
                        return Err(ArtifactError::malformed(format!(
                            "tree {tree} node {index} has children {left}/{right} that do not point forward"
                        )));
                    }
                }
                TreeNode::Leaf { value } => {
                    if value.len() != n_classes || !value.iter().all(|v| v.is_finite()) {
                        return Err(ArtifactError::malformed(format!(
                            "tree {tree} leaf {index} needs {n_classes} finite values"
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Leaf reached by an encoded vector
    fn leaf(&self, encoded: &[f64]) -> Result<&[f64], ClassifierError> {
        let mut index = 0;
        loop {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { value }) => return Ok(value.as_slice()),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let x = encoded
                        .get(*feature)
                        .ok_or_else(|| ClassifierError::Degenerate {
                            reason: format!("feature {feature} is outside the encoded vector"),
                        })?;
                    index = if x <= threshold { *left } else { *right };
                }
                None => {
                    return Err(ClassifierError::Degenerate {
                        reason: format!("tree walked to missing node {index}"),
                    })
                }
            }
        }
    }
}

/// Ensemble of decision trees sharing one encoder
#[derive(Debug, Clone, Deserialize)]
pub struct TreeEnsembleClassifier {
    /// Column encoder
    pub preprocessor: Preprocessor,
    /// Number of classes every leaf scores
    pub n_classes: usize,
    /// Trees voting by summed leaf values
    pub trees: Vec<DecisionTree>,
}

impl TreeEnsembleClassifier {
    /// Check encoder, tree topology, and leaf widths.
    ///
    /// # Errors
    ///
    /// Returns an `ArtifactError` describing the first inconsistency.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        self.preprocessor.validate()?;
        if self.n_classes == 0 || self.trees.is_empty() {
            return Err(ArtifactError::malformed(
                "tree ensemble needs at least one class and one tree",
            ));
        }
        let width = self.preprocessor.encoded_len();
        for (index, tree) in self.trees.iter().enumerate() {
            tree.validate(index, width, self.n_classes)?;
        }
        Ok(())
    }
}

impl Classifier for TreeEnsembleClassifier {
    fn predict(&self, record: &FeatureRecord) -> Result<ClassId, ClassifierError> {
        let encoded = self.preprocessor.encode(record)?;
        let mut totals = vec![0.0; self.n_classes];
        for tree in &self.trees {
            for (total, value) in totals.iter_mut().zip(tree.leaf(&encoded)?) {
                *total += value;
            }
        }
        argmax(&totals)
    }

    fn class_count(&self) -> Option<usize> {
        Some(self.n_classes)
    }

    fn describe(&self) -> String {
        format!(
            "tree ensemble ({} trees, {} classes)",
            self.trees.len(),
            self.n_classes
        )
    }
}
