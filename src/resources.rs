// ABOUTME: Shared server resources handed to every route as axum state
// ABOUTME: Holds the validated configuration and the prediction pipeline built at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use crate::logging::AppLogger;
use obesity_intelligence::prediction::ModelState;
use obesity_intelligence::PredictionPipeline;
use std::sync::Arc;

/// Everything a request handler may read. Nothing in here is mutated after
/// startup.
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Prediction pipeline over the models loaded at startup
    pub pipeline: Arc<PredictionPipeline>,
}

impl ServerResources {
    /// Build resources from an already prepared model state
    #[must_use]
    pub fn new(config: ServerConfig, state: ModelState) -> Self {
        Self {
            config: Arc::new(config),
            pipeline: Arc::new(PredictionPipeline::new(state)),
        }
    }

    /// Load the artifacts named by the configuration. A failed load is kept
    /// as an unavailable model state rather than returned.
    #[must_use]
    pub fn load(config: ServerConfig) -> Self {
        let paths = config.artifact_paths();
        let state = ModelState::load(&paths);
        AppLogger::log_artifact_load(
            &paths.model,
            &paths.label_encoder,
            state.unavailable_reason(),
        );
        Self::new(config, state)
    }
}
