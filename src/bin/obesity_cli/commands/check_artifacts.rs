// ABOUTME: Artifact check command for obesity-cli
// ABOUTME: Loads both artifacts with full load-time validation and reports what was found
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use obesity_intelligence::artifacts::{load_classifier, load_label_encoder, ArtifactPaths};
use obesity_intelligence::LoadedModels;
use std::sync::Arc;
use tracing::info;

use crate::helpers::display::display_artifact_report;

/// Load both artifacts and cross-check their class counts
pub fn run(paths: &ArtifactPaths) -> Result<()> {
    let classifier = load_classifier(&paths.model)
        .with_context(|| format!("classifier artifact {}", paths.model.display()))?;
    let encoder = load_label_encoder(&paths.label_encoder)
        .with_context(|| format!("label encoder artifact {}", paths.label_encoder.display()))?;

    let labels = encoder.classes().to_vec();
    let models = LoadedModels::checked(classifier, Arc::new(encoder))
        .context("artifacts do not belong together")?;
    info!("artifact pair is consistent");

    display_artifact_report(paths, &models.classifier().describe(), &labels);
    Ok(())
}
