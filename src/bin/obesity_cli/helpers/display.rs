// ABOUTME: Output helpers for obesity-cli
// ABOUTME: Prints presenter output and the artifact check summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use obesity_core::models::ObesityCategory;
use obesity_insight_server::formatters::{format_output, OutputFormat, TextSummary};
use obesity_intelligence::artifacts::ArtifactPaths;
use serde::Serialize;

/// Render through the presenters and print to stdout
pub fn print_formatted<T: Serialize + TextSummary>(value: &T, format: OutputFormat) -> Result<()> {
    let output = format_output(value, format)?;
    match output.format {
        OutputFormat::Json => println!("{}", output.data),
        OutputFormat::Text => print!("{}", output.data),
    }
    Ok(())
}

/// Summarize a successfully checked artifact pair
pub fn display_artifact_report(paths: &ArtifactPaths, classifier: &str, labels: &[String]) {
    println!("\nArtifacts OK");
    println!("{}", "=".repeat(50));
    println!("   Model:          {}", paths.model.display());
    println!("   Label encoder:  {}", paths.label_encoder.display());
    println!("   Classifier:     {classifier}");
    println!("   Classes:        {}", labels.len());
    for (class_id, label) in labels.iter().enumerate() {
        let marker = if ObesityCategory::from_label(label).is_some() {
            ""
        } else {
            "  (no display color, default used)"
        };
        println!("     {class_id}: {label}{marker}");
    }
}
