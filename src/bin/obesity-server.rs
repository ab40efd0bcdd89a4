// ABOUTME: HTTP server binary for the obesity category prediction service
// ABOUTME: Loads the model artifacts once, then serves prediction, BMI, schema, and health routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Obesity Insight Server Binary
//!
//! Configuration comes from the environment; flags override the bind port and
//! artifact paths. The process refuses to start when the artifacts cannot be
//! loaded unless `--serve-without-models` is given, in which case predictions
//! answer 503 and `/ready` reports the load failure.

use anyhow::{bail, Result};
use clap::Parser;
use obesity_insight_server::config::ServerConfig;
use obesity_insight_server::logging;
use obesity_insight_server::resources::ServerResources;
use obesity_insight_server::server;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Command-line overrides for the server configuration
#[derive(Parser)]
#[command(name = "obesity-server")]
#[command(about = "Obesity Insight - obesity category prediction API")]
pub struct Args {
    /// Override bind host
    #[arg(long)]
    host: Option<String>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the classifier artifact path
    #[arg(long)]
    model: Option<PathBuf>,

    /// Override the label encoder artifact path
    #[arg(long)]
    label_encoder: Option<PathBuf>,

    /// Keep serving health and BMI routes when the models fail to load
    #[arg(long)]
    serve_without_models: bool,
}

impl Args {
    fn apply(self, config: &mut ServerConfig) {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(http_port) = self.http_port {
            config.http_port = http_port;
        }
        if let Some(model) = self.model {
            config.artifacts.model_path = model;
        }
        if let Some(label_encoder) = self.label_encoder {
            config.artifacts.label_encoder_path = label_encoder;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let serve_without_models = args.serve_without_models;

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    args.apply(&mut config);
    config.validate()?;

    info!("Starting Obesity Insight server");
    info!("{}", config.summary());

    let resources = ServerResources::load(config);
    if let Some(reason) = resources.pipeline.model_state().unavailable_reason() {
        if !serve_without_models {
            bail!("model artifacts unavailable: {reason}");
        }
        warn!("Serving without prediction models, /predict will answer 503");
    }

    display_available_endpoints(&resources.config);

    if let Err(e) = server::serve(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }
    Ok(())
}

/// Display all available API endpoints
fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}", config.bind_address());
    info!("=== Available API Endpoints ===");
    info!("   Predict:    POST {base}/predict[?format=text]");
    info!("   BMI:        POST {base}/bmi");
    info!("   Form:       GET  {base}/schema");
    info!("   Health:     GET  {base}/health");
    info!("   Readiness:  GET  {base}/ready");
    info!("=== End of Endpoint List ===");
}
