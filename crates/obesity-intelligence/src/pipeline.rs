// ABOUTME: End-to-end prediction pipeline from raw survey input to a report
// ABOUTME: Build record, evaluate BMI, classify, then assemble the dashboard report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::algorithms::bmi;
use crate::features::FeatureRecordBuilder;
use crate::prediction::{ModelState, PredictionInvoker};
use obesity_core::errors::PipelineError;
use obesity_core::models::{BmiResult, PredictionReport, RawInput};

/// One pass over a submission. Stages fail fast: a validation error never
/// reaches the classifier.
#[derive(Debug, Clone)]
pub struct PredictionPipeline {
    invoker: PredictionInvoker,
}

impl PredictionPipeline {
    /// Pipeline over an already loaded (or failed) model state
    #[must_use]
    pub const fn new(state: ModelState) -> Self {
        Self {
            invoker: PredictionInvoker::new(state),
        }
    }

    /// Whether the classifier is available
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.invoker.state().is_ready()
    }

    /// Model state backing this pipeline
    #[must_use]
    pub const fn model_state(&self) -> &ModelState {
        self.invoker.state()
    }

    /// BMI on its own, without touching the classifier.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::InvalidArgument` for non-positive height or weight.
    pub fn evaluate_bmi(height: f64, weight: f64) -> Result<BmiResult, PipelineError> {
        bmi::evaluate(height, weight)
    }

    /// Run a full prediction.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for out-of-domain input, `ModelUnavailable` if the
    /// models failed to load, and `Prediction` if inference fails.
    pub fn run(&self, raw: &RawInput) -> Result<PredictionReport, PipelineError> {
        let record = FeatureRecordBuilder::build(raw)?;
        let bmi = bmi::evaluate(record.height, record.weight)?;
        let prediction = self.invoker.invoke(&record)?;
        Ok(PredictionReport::new(prediction, bmi, record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::tests::{standard_encoder, FixedClassifier};
    use crate::prediction::LoadedModels;
    use obesity_core::models::BmiStatus;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing::subscriber::{self, Subscriber};
    use tracing::{Event, Level};
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::{registry, Layer};

    /// Counts events at info or above
    struct NoticeCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for NoticeCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() <= Level::INFO {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn notices_during(run: impl FnOnce()) -> usize {
        let count = Arc::new(AtomicUsize::new(0));
        let collector = registry().with(NoticeCounter(Arc::clone(&count)));
        subscriber::with_default(collector, run);
        count.load(Ordering::SeqCst)
    }

    fn pipeline_answering(class_id: u32) -> PredictionPipeline {
        let models = LoadedModels::new(
            Arc::new(FixedClassifier(class_id)),
            Arc::new(standard_encoder()),
        );
        PredictionPipeline::new(models.into())
    }

    fn scenario_input() -> RawInput {
        RawInput {
            gender: "Female".into(),
            age: 30,
            height: 1.60,
            weight: 90.0,
            caec: "Sometimes".into(),
            faf: 0,
            mtrans: "Automobile".into(),
            ..RawInput::default()
        }
    }

    #[test]
    fn test_report_combines_prediction_bmi_and_highlights() {
        // sorted labels: index 3 is Obesity_Type_II
        let report = pipeline_answering(3).run(&scenario_input()).unwrap();
        assert_eq!(report.prediction.predicted_label, "Obesity_Type_II");
        assert_eq!(report.prediction.display_color, "#ef4444");
        assert_eq!(report.bmi.status, BmiStatus::Obese);
        assert!((report.highlights.bmi - 35.16).abs() < 1e-9);
        assert_eq!(report.highlights.physical_activity, 0);
        assert_eq!(report.input.age, 30);
    }

    #[test]
    fn test_validation_error_stops_before_classifier() {
        let pipeline = PredictionPipeline::new(ModelState::unavailable("not loaded"));
        let mut raw = scenario_input();
        raw.ncp = 9;
        // Validation wins over the unavailable model
        assert!(matches!(
            pipeline.run(&raw),
            Err(PipelineError::Validation { field: "ncp", .. })
        ));
    }

    #[test]
    fn test_unavailable_models_fail_valid_input() {
        let pipeline = PredictionPipeline::new(ModelState::unavailable("not loaded"));
        assert!(!pipeline.is_ready());
        assert!(matches!(
            pipeline.run(&scenario_input()),
            Err(PipelineError::ModelUnavailable { .. })
        ));
        // BMI does not need the classifier
        assert_eq!(
            PredictionPipeline::evaluate_bmi(1.70, 70.0).unwrap().status,
            BmiStatus::Normal
        );
    }

    #[test]
    fn test_pipeline_leaves_request_logging_to_the_caller() {
        let pipeline = pipeline_answering(3);
        let accepted = notices_during(|| {
            pipeline.run(&scenario_input()).unwrap();
        });
        assert_eq!(accepted, 0);

        let mut raw = scenario_input();
        raw.age = 0;
        let rejected = notices_during(|| {
            pipeline.run(&raw).unwrap_err();
        });
        assert_eq!(rejected, 0);
    }
}
