// ABOUTME: Predict command for obesity-cli
// ABOUTME: Collects survey answers from flags, runs the pipeline, and prints the report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::{Context, Result};
use clap::Args;
use obesity_core::models::RawInput;
use obesity_insight_server::formatters::OutputFormat;
use obesity_intelligence::artifacts::{load_models, ArtifactPaths};
use obesity_intelligence::PredictionPipeline;
use tracing::info;

use crate::helpers::display::print_formatted;

/// Survey answers. Every flag falls back to the value the input form starts with.
#[derive(Debug, Args)]
pub struct SurveyArgs {
    /// Male or Female [default: Male]
    #[arg(long)]
    gender: Option<String>,

    /// Age in years, 1 to 120 [default: 21]
    #[arg(long)]
    age: Option<i64>,

    /// Height in meters, 0.5 to 2.5 [default: 1.70]
    #[arg(long)]
    height: Option<f64>,

    /// Weight in kilograms, 10 to 300 [default: 70.0]
    #[arg(long)]
    weight: Option<f64>,

    /// Family history with overweight, yes or no [default: yes]
    #[arg(long)]
    family_history: Option<String>,

    /// Frequent high caloric food, yes or no [default: yes]
    #[arg(long)]
    favc: Option<String>,

    /// Vegetable consumption, 1 to 3 [default: 2]
    #[arg(long)]
    fcvc: Option<i64>,

    /// Main meals per day, 1 to 4 [default: 3]
    #[arg(long)]
    ncp: Option<i64>,

    /// Eating between meals: no, Sometimes, Frequently, Always [default: no]
    #[arg(long)]
    caec: Option<String>,

    /// Smoker, yes or no [default: yes]
    #[arg(long)]
    smoke: Option<String>,

    /// Water intake, 1 to 3 [default: 2]
    #[arg(long)]
    ch2o: Option<i64>,

    /// Calorie monitoring, yes or no [default: yes]
    #[arg(long)]
    scc: Option<String>,

    /// Physical activity, 0 to 3 [default: 1]
    #[arg(long)]
    faf: Option<i64>,

    /// Technology use, 0 to 2 [default: 1]
    #[arg(long)]
    tue: Option<i64>,

    /// Alcohol: no, Sometimes, Frequently, Always [default: no]
    #[arg(long)]
    calc: Option<String>,

    /// Transport: Public_Transportation, Automobile, Walking, Motorbike, Bike
    /// [default: Public_Transportation]
    #[arg(long)]
    mtrans: Option<String>,
}

impl SurveyArgs {
    /// Fill unset answers from the form defaults
    pub fn into_raw_input(self) -> RawInput {
        let form = RawInput::default();
        RawInput {
            gender: self.gender.unwrap_or(form.gender),
            age: self.age.unwrap_or(form.age),
            height: self.height.unwrap_or(form.height),
            weight: self.weight.unwrap_or(form.weight),
            family_history: self.family_history.unwrap_or(form.family_history),
            favc: self.favc.unwrap_or(form.favc),
            fcvc: self.fcvc.unwrap_or(form.fcvc),
            ncp: self.ncp.unwrap_or(form.ncp),
            caec: self.caec.unwrap_or(form.caec),
            smoke: self.smoke.unwrap_or(form.smoke),
            ch2o: self.ch2o.unwrap_or(form.ch2o),
            scc: self.scc.unwrap_or(form.scc),
            faf: self.faf.unwrap_or(form.faf),
            tue: self.tue.unwrap_or(form.tue),
            calc: self.calc.unwrap_or(form.calc),
            mtrans: self.mtrans.unwrap_or(form.mtrans),
        }
    }
}

/// Load the artifacts, run one prediction, print the report
pub fn run(paths: &ArtifactPaths, survey: SurveyArgs, format: OutputFormat) -> Result<()> {
    let models = load_models(paths).with_context(|| {
        format!(
            "cannot load models from {} and {}",
            paths.model.display(),
            paths.label_encoder.display()
        )
    })?;
    let pipeline = PredictionPipeline::new(models.into());

    let raw = survey.into_raw_input();
    let report = pipeline.run(&raw)?;
    info!(label = %report.prediction.predicted_label, "prediction complete");

    print_formatted(&report, format)
}
