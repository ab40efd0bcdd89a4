// ABOUTME: Artifact and request fixtures shared by the integration tests
// ABOUTME: Writes small JSON classifier/encoder pairs to temp dirs and builds server resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use obesity_core::models::{FeatureColumn, ObesityCategory};
use obesity_insight_server::config::ServerConfig;
use obesity_insight_server::resources::ServerResources;
use obesity_intelligence::artifacts::ArtifactPaths;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

/// Position of `Weight` in the encoded vector: Gender one-hot (2), Age, Height
pub const WEIGHT_FEATURE: usize = 4;

/// Artifacts on disk; the directory lives as long as the fixture
pub struct ArtifactFixture {
    _dir: TempDir,
    pub paths: ArtifactPaths,
}

/// Preprocessor listing every column in record order, without scaling
pub fn preprocessor_document() -> Value {
    let columns: Vec<Value> = FeatureColumn::ALL
        .iter()
        .map(|column| match column.categories() {
            Some(categories) => json!({
                "name": column.name(),
                "type": "categorical",
                "categories": categories,
            }),
            None => json!({ "name": column.name(), "type": "numeric" }),
        })
        .collect();
    json!({ "columns": columns })
}

/// The seven category labels sorted, as a fitted label encoder stores them
pub fn sorted_labels() -> Vec<String> {
    let mut labels: Vec<String> = ObesityCategory::ALL
        .iter()
        .map(|category| category.label().to_owned())
        .collect();
    labels.sort();
    labels
}

fn one_hot(labels: &[String], label: &str) -> Vec<f64> {
    labels
        .iter()
        .map(|candidate| if candidate == label { 1.0 } else { 0.0 })
        .collect()
}

/// Single-tree ensemble: weight up to 80 kg is `Normal_Weight`, above is `Obesity_Type_II`
pub fn weight_stump_artifact() -> Value {
    let labels = sorted_labels();
    let light = one_hot(&labels, "Normal_Weight");
    let heavy = one_hot(&labels, "Obesity_Type_II");
    json!({
        "kind": "tree_ensemble",
        "preprocessor": preprocessor_document(),
        "n_classes": labels.len(),
        "trees": [{
            "nodes": [
                { "feature": WEIGHT_FEATURE, "threshold": 80.0, "left": 1, "right": 2 },
                { "value": light },
                { "value": heavy },
            ]
        }]
    })
}

/// Label encoder artifact for the sorted labels
pub fn label_encoder_artifact() -> Value {
    json!({ "classes": sorted_labels() })
}

/// Write a classifier and label encoder into a fresh temp dir
pub fn write_artifacts(model: &Value, label_encoder: &Value) -> ArtifactFixture {
    let dir = TempDir::new().expect("create temp dir");
    let model_path = dir.path().join("model.json");
    let encoder_path = dir.path().join("label_encoder.json");
    fs::write(&model_path, serde_json::to_vec(model).unwrap()).unwrap();
    fs::write(&encoder_path, serde_json::to_vec(label_encoder).unwrap()).unwrap();
    ArtifactFixture {
        _dir: dir,
        paths: ArtifactPaths::new(model_path, encoder_path),
    }
}

/// The weight stump with its encoder
pub fn weight_stump_fixture() -> ArtifactFixture {
    write_artifacts(&weight_stump_artifact(), &label_encoder_artifact())
}

/// Configuration pointing at the given artifacts
pub fn config_for(paths: &ArtifactPaths) -> ServerConfig {
    let mut config = ServerConfig::default();
    config.artifacts.model_path.clone_from(&paths.model);
    config.artifacts.label_encoder_path.clone_from(&paths.label_encoder);
    config
}

/// Resources with the weight stump loaded; keep the fixture alive with them
pub fn ready_resources() -> (ArtifactFixture, ServerResources) {
    let fixture = weight_stump_fixture();
    let resources = ServerResources::load(config_for(&fixture.paths));
    assert!(resources.pipeline.is_ready());
    (fixture, resources)
}

/// Resources whose model load failed
pub fn unavailable_resources() -> ServerResources {
    let paths = ArtifactPaths::new("/nonexistent/model.json", "/nonexistent/label_encoder.json");
    ServerResources::load(config_for(&paths))
}

/// Female, 30, 1.60 m, 90 kg, otherwise form defaults: BMI 35.16
pub fn obese_submission() -> Value {
    json!({
        "gender": "Female",
        "age": 30,
        "height": 1.60,
        "weight": 90.0,
        "family_history": "yes",
        "favc": "yes",
        "fcvc": 2,
        "ncp": 3,
        "caec": "Sometimes",
        "smoke": "no",
        "ch2o": 2,
        "scc": "no",
        "faf": 0,
        "tue": 1,
        "calc": "no",
        "mtrans": "Automobile"
    })
}
