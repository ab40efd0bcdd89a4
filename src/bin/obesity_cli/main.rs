// ABOUTME: Obesity CLI - command-line front end for the obesity category predictor
// ABOUTME: Runs predictions and BMI checks locally against the same artifacts the server loads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Predict with the form defaults, overriding a few answers
//! obesity-cli predict --gender Female --age 30 --height 1.60 --weight 90 --faf 0
//!
//! # Same, as an aligned text summary
//! obesity-cli predict --weight 90 --format text
//!
//! # BMI only
//! obesity-cli bmi --height 1.70 --weight 70
//!
//! # Every input field with its domain and default
//! obesity-cli schema --format text
//!
//! # Validate the artifact pair without predicting
//! obesity-cli check-artifacts --model models/best_obesity_model.json
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use obesity_insight_server::constants::{defaults, env_vars};
use obesity_insight_server::formatters::OutputFormat;
use obesity_insight_server::logging::LoggingConfig;
use obesity_intelligence::artifacts::ArtifactPaths;
use std::env;
use std::path::PathBuf;
use tracing::debug;

use commands::predict::SurveyArgs;

#[derive(Parser)]
#[command(
    name = "obesity-cli",
    about = "Obesity Insight command-line predictor",
    long_about = "Predicts an obesity category from lifestyle survey answers and reports BMI.",
    allow_negative_numbers = true
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Classifier artifact (defaults to `MODEL_PATH`)
    #[arg(long, global = true)]
    model: Option<PathBuf>,

    /// Label encoder artifact (defaults to `LABEL_ENCODER_PATH`)
    #[arg(long, global = true)]
    label_encoder: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

impl Cli {
    fn artifact_paths(&self) -> ArtifactPaths {
        let model = self.model.clone().unwrap_or_else(|| {
            env::var(env_vars::MODEL_PATH)
                .map_or_else(|_| PathBuf::from(defaults::MODEL_PATH), PathBuf::from)
        });
        let label_encoder = self.label_encoder.clone().unwrap_or_else(|| {
            env::var(env_vars::LABEL_ENCODER_PATH)
                .map_or_else(|_| PathBuf::from(defaults::LABEL_ENCODER_PATH), PathBuf::from)
        });
        ArtifactPaths::new(model, label_encoder)
    }
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Predict the obesity category for one set of survey answers
    Predict {
        #[command(flatten)]
        survey: SurveyArgs,
    },

    /// Compute BMI and its status
    Bmi {
        /// Height in meters
        #[arg(long)]
        height: f64,

        /// Weight in kilograms
        #[arg(long)]
        weight: f64,
    },

    /// List every input field with its domain and default value
    Schema,

    /// Load and cross-check the classifier and label encoder artifacts
    CheckArtifacts,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    LoggingConfig::for_cli(cli.verbose).init()?;
    debug!(format = %cli.format, "Obesity CLI");

    let paths = cli.artifact_paths();
    match cli.command {
        Command::Predict { survey } => commands::predict::run(&paths, survey, cli.format),
        Command::Bmi { height, weight } => commands::bmi::run(height, weight, cli.format),
        Command::Schema => commands::schema::run(cli.format),
        Command::CheckArtifacts => commands::check_artifacts::run(&paths),
    }
}
