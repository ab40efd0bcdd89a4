// ABOUTME: Benchmark fixtures for generating survey submissions and model artifacts
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures.
//!
//! Submissions cycle through every categorical option and sweep the numeric
//! fields across their domains, so encoders see every branch.

use obesity_core::models::{
    Choice, FeatureColumn, Frequency, Gender, ObesityCategory, RawInput, Transport, YesNo,
};
use obesity_intelligence::artifacts::{ClassifierArtifact, LabelEncoder};
use obesity_intelligence::{LoadedModels, ModelState};
use serde_json::{json, Value};
use std::sync::Arc;

/// Predefined batch sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum SubmissionBatchSize {
    /// Small batch (10 submissions)
    Small,
    /// Medium batch (1000 submissions)
    Medium,
}

impl SubmissionBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 1_000,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Small => "10",
            Self::Medium => "1000",
        }
    }
}

fn pick<T: Choice>(index: usize) -> String {
    T::OPTIONS[index % T::OPTIONS.len()].as_str().to_owned()
}

/// Generate `count` valid submissions
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub fn generate_submissions(count: usize) -> Vec<RawInput> {
    (0..count)
        .map(|index| RawInput {
            gender: pick::<Gender>(index),
            age: 16 + (index % 50) as i64,
            height: 1.45 + (index % 50) as f64 * 0.01,
            weight: 45.0 + (index % 90) as f64,
            family_history: pick::<YesNo>(index),
            favc: pick::<YesNo>(index / 2),
            fcvc: 1 + (index % 3) as i64,
            ncp: 1 + (index % 4) as i64,
            caec: pick::<Frequency>(index),
            smoke: pick::<YesNo>(index / 3),
            ch2o: 1 + (index % 3) as i64,
            scc: pick::<YesNo>(index / 5),
            faf: (index % 4) as i64,
            tue: (index % 3) as i64,
            calc: pick::<Frequency>(index / 2),
            mtrans: pick::<Transport>(index),
        })
        .collect()
}

fn preprocessor_document() -> Value {
    let columns: Vec<Value> = FeatureColumn::ALL
        .iter()
        .map(|column| match column.categories() {
            Some(categories) => json!({
                "name": column.name(),
                "type": "categorical",
                "categories": categories,
            }),
            None => json!({ "name": column.name(), "type": "numeric", "mean": 1.0, "scale": 2.0 }),
        })
        .collect();
    json!({ "columns": columns })
}

fn sorted_labels() -> Vec<String> {
    let mut labels: Vec<String> = ObesityCategory::ALL
        .iter()
        .map(|category| category.label().to_owned())
        .collect();
    labels.sort();
    labels
}

/// Dense linear model over the 31 encoded features
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn linear_models() -> ModelState {
    let labels = sorted_labels();
    let coefficients: Vec<Vec<f64>> = (0..labels.len())
        .map(|class| {
            (0..31)
                .map(|feature| ((class * 31 + feature) % 7) as f64 * 0.1 - 0.3)
                .collect()
        })
        .collect();
    let intercepts = vec![0.0; labels.len()];
    let document = json!({
        "kind": "linear",
        "preprocessor": preprocessor_document(),
        "coefficients": coefficients,
        "intercepts": intercepts,
    });
    models_from(document, labels)
}

/// Ensemble of depth-two trees splitting on weight then height
#[must_use]
pub fn tree_models(trees: usize) -> ModelState {
    let labels = sorted_labels();
    let leaf = |class: usize| -> Vec<f64> {
        (0..labels.len())
            .map(|index| if index == class { 1.0 } else { 0.0 })
            .collect()
    };
    let tree = json!({
        "nodes": [
            { "feature": 4, "threshold": 20.0, "left": 1, "right": 2 },
            { "feature": 3, "threshold": 0.0, "left": 3, "right": 4 },
            { "feature": 3, "threshold": 0.0, "left": 5, "right": 6 },
            { "value": leaf(1) },
            { "value": leaf(0) },
            { "value": leaf(3) },
            { "value": leaf(6) },
        ]
    });
    let document = json!({
        "kind": "tree_ensemble",
        "preprocessor": preprocessor_document(),
        "n_classes": labels.len(),
        "trees": vec![tree; trees],
    });
    models_from(document, labels)
}

fn models_from(document: Value, labels: Vec<String>) -> ModelState {
    let artifact: ClassifierArtifact = serde_json::from_value(document).unwrap();
    let classifier = artifact.into_classifier().unwrap();
    let encoder = LabelEncoder::new(labels).unwrap();
    LoadedModels::checked(classifier, Arc::new(encoder))
        .unwrap()
        .into()
}
