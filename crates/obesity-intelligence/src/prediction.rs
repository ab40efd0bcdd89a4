// ABOUTME: Prediction invoker: runs the classifier on one record and decodes the label
// ABOUTME: Holds the load-once model state shared read-only across requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Prediction Invoker
//!
//! Models are loaded once at startup into a [`ModelState`]. If loading fails
//! the state records why, and every later prediction fails fast with
//! `ModelUnavailable` instead of retrying the load.

use crate::artifacts::{load_models, ArtifactError, ArtifactPaths};
use crate::classifier::{Classifier, LabelDecoder};
use obesity_core::errors::PipelineError;
use obesity_core::models::{FeatureRecord, ObesityCategory, PredictionResult};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A classifier paired with the decoder for its class ids
#[derive(Clone)]
pub struct LoadedModels {
    classifier: Arc<dyn Classifier>,
    decoder: Arc<dyn LabelDecoder>,
}

impl LoadedModels {
    /// Pair a classifier with a decoder without cross-checking them
    #[must_use]
    pub fn new(classifier: Arc<dyn Classifier>, decoder: Arc<dyn LabelDecoder>) -> Self {
        Self {
            classifier,
            decoder,
        }
    }

    /// Pair a classifier with a decoder, requiring matching class counts when
    /// both sides report one.
    ///
    /// # Errors
    ///
    /// Returns `ArtifactError::ClassCountMismatch` if the counts differ.
    pub fn checked(
        classifier: Arc<dyn Classifier>,
        decoder: Arc<dyn LabelDecoder>,
    ) -> Result<Self, ArtifactError> {
        if let (Some(classes), Some(labels)) = (classifier.class_count(), decoder.class_count()) {
            if classes != labels {
                return Err(ArtifactError::ClassCountMismatch {
                    classifier: classes,
                    encoder: labels,
                });
            }
        }
        Ok(Self::new(classifier, decoder))
    }

    /// The classifier
    #[must_use]
    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    /// The label decoder
    #[must_use]
    pub fn decoder(&self) -> &dyn LabelDecoder {
        self.decoder.as_ref()
    }
}

impl fmt::Debug for LoadedModels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedModels")
            .field("classifier", &self.classifier.describe())
            .field("labels", &self.decoder.class_count())
            .finish()
    }
}

/// Outcome of the one-time model load
#[derive(Debug, Clone)]
pub enum ModelState {
    /// Models are loaded and usable
    Ready(LoadedModels),
    /// Loading failed; predictions are refused
    Unavailable {
        /// Why loading failed
        reason: String,
    },
}

impl ModelState {
    /// Load both artifacts, recording failure instead of returning it
    #[must_use]
    pub fn load(paths: &ArtifactPaths) -> Self {
        match load_models(paths) {
            Ok(models) => Self::Ready(models),
            Err(e) => Self::Unavailable {
                reason: e.to_string(),
            },
        }
    }

    /// State for a load that failed elsewhere
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Whether predictions can be served
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Why the models are unavailable, if they are
    #[must_use]
    pub fn unavailable_reason(&self) -> Option<&str> {
        match self {
            Self::Ready(_) => None,
            Self::Unavailable { reason } => Some(reason.as_str()),
        }
    }

    /// Loaded models.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::ModelUnavailable` if loading failed.
    pub fn models(&self) -> Result<&LoadedModels, PipelineError> {
        match self {
            Self::Ready(models) => Ok(models),
            Self::Unavailable { reason } => Err(PipelineError::model_unavailable(reason.clone())),
        }
    }
}

impl From<LoadedModels> for ModelState {
    fn from(models: LoadedModels) -> Self {
        Self::Ready(models)
    }
}

/// Classify one record and decode the class id.
///
/// # Errors
///
/// Returns `PipelineError::Prediction` if the classifier or decoder fails.
pub fn invoke(
    record: &FeatureRecord,
    classifier: &dyn Classifier,
    decoder: &dyn LabelDecoder,
) -> Result<PredictionResult, PipelineError> {
    let predicted_class_id = classifier.predict(record)?;
    let predicted_label = decoder.decode(predicted_class_id)?;
    let display_color = ObesityCategory::color_for_label(&predicted_label).to_owned();
    debug!(
        class_id = predicted_class_id,
        label = %predicted_label,
        "record classified"
    );
    Ok(PredictionResult {
        predicted_class_id,
        predicted_label,
        display_color,
    })
}

/// Invokes the loaded models
#[derive(Debug, Clone)]
pub struct PredictionInvoker {
    state: ModelState,
}

impl PredictionInvoker {
    /// Wrap a model state
    #[must_use]
    pub const fn new(state: ModelState) -> Self {
        Self { state }
    }

    /// Current model state
    #[must_use]
    pub const fn state(&self) -> &ModelState {
        &self.state
    }

    /// Classify one record.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::ModelUnavailable` when no models are loaded and
    /// `PipelineError::Prediction` when inference fails.
    pub fn invoke(&self, record: &FeatureRecord) -> Result<PredictionResult, PipelineError> {
        let models = self.state.models()?;
        invoke(record, models.classifier(), models.decoder())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::artifacts::preprocessor::tests::sample_record;
    use crate::artifacts::LabelEncoder;
    use crate::classifier::ClassifierError;
    use obesity_core::models::ClassId;

    /// Classifier that always answers with the same class
    pub(crate) struct FixedClassifier(pub ClassId);

    impl Classifier for FixedClassifier {
        fn predict(&self, _record: &FeatureRecord) -> Result<ClassId, ClassifierError> {
            Ok(self.0)
        }
    }

    struct FailingClassifier;

    impl Classifier for FailingClassifier {
        fn predict(&self, _record: &FeatureRecord) -> Result<ClassId, ClassifierError> {
            Err(ClassifierError::UnknownCategory {
                column: "MTRANS".into(),
                value: "Teleport".into(),
            })
        }
    }

    /// Encoder with the seven categories in training order
    pub(crate) fn standard_encoder() -> LabelEncoder {
        let mut classes: Vec<String> = ObesityCategory::ALL
            .iter()
            .map(|category| category.label().to_owned())
            .collect();
        classes.sort();
        LabelEncoder::new(classes).unwrap()
    }

    #[test]
    fn test_stub_class_decodes_to_label_and_color() {
        let record = sample_record();
        let encoder = LabelEncoder::new(vec![
            "Insufficient_Weight".into(),
            "Normal_Weight".into(),
            "Overweight_Level_I".into(),
            "Overweight_Level_II".into(),
            "Obesity_Type_I".into(),
            "Obesity_Type_II".into(),
            "Obesity_Type_III".into(),
        ])
        .unwrap();

        let result = invoke(&record, &FixedClassifier(5), &encoder).unwrap();
        assert_eq!(result.predicted_class_id, 5);
        assert_eq!(result.predicted_label, "Obesity_Type_II");
        assert_eq!(result.display_color, "#ef4444");
    }

    #[test]
    fn test_unmapped_label_gets_default_color() {
        let encoder = LabelEncoder::new(vec!["Something_Else".into()]).unwrap();
        let result = invoke(&sample_record(), &FixedClassifier(0), &encoder).unwrap();
        assert_eq!(result.display_color, "#00bbf9");
    }

    #[test]
    fn test_classifier_failure_is_prediction_error() {
        let error = invoke(&sample_record(), &FailingClassifier, &standard_encoder()).unwrap_err();
        assert!(matches!(error, PipelineError::Prediction { .. }));
    }

    #[test]
    fn test_unknown_class_id_is_prediction_error() {
        let error =
            invoke(&sample_record(), &FixedClassifier(42), &standard_encoder()).unwrap_err();
        assert!(matches!(error, PipelineError::Prediction { .. }));
    }

    #[test]
    fn test_unavailable_state_fails_fast() {
        let invoker = PredictionInvoker::new(ModelState::unavailable("model file missing"));
        let error = invoker.invoke(&sample_record()).unwrap_err();
        assert!(matches!(error, PipelineError::ModelUnavailable { .. }));
        assert!(!invoker.state().is_ready());
        assert_eq!(
            invoker.state().unavailable_reason(),
            Some("model file missing")
        );
    }

    #[test]
    fn test_load_failure_is_recorded() {
        let state = ModelState::load(&ArtifactPaths::new(
            "/nonexistent/model.json",
            "/nonexistent/label_encoder.json",
        ));
        assert!(!state.is_ready());
        assert!(state
            .unavailable_reason()
            .unwrap()
            .contains("/nonexistent/model.json"));
    }

    #[test]
    fn test_checked_pairing_rejects_count_mismatch() {
        struct SevenClasses;
        impl Classifier for SevenClasses {
            fn predict(&self, _record: &FeatureRecord) -> Result<ClassId, ClassifierError> {
                Ok(0)
            }
            fn class_count(&self) -> Option<usize> {
                Some(7)
            }
        }
        let small = LabelEncoder::new(vec!["Normal_Weight".into()]).unwrap();
        assert!(LoadedModels::checked(Arc::new(SevenClasses), Arc::new(small)).is_err());
        assert!(LoadedModels::checked(Arc::new(SevenClasses), Arc::new(standard_encoder())).is_ok());
        // stubs that do not report a count are accepted
        assert!(LoadedModels::checked(Arc::new(FixedClassifier(0)), Arc::new(standard_encoder())).is_ok());
    }
}
