// ABOUTME: Server-side constants: environment variable names and configuration defaults
// ABOUTME: Domain constants (ranges, thresholds, colors) live in obesity-core
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants for the HTTP server and CLI

pub use obesity_core::constants::service_names;

/// Environment variable names read by `ServerConfig::from_env`
pub mod env_vars {
    /// Bind address
    pub const HOST: &str = "HOST";
    /// Bind port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Classifier artifact path
    pub const MODEL_PATH: &str = "MODEL_PATH";
    /// Label encoder artifact path
    pub const LABEL_ENCODER_PATH: &str = "LABEL_ENCODER_PATH";
    /// Comma-separated CORS origins
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: &str = "REQUEST_TIMEOUT_SECS";
    /// Request body size limit in bytes
    pub const MAX_REQUEST_BODY_BYTES: &str = "MAX_REQUEST_BODY_BYTES";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log filter
    pub const RUST_LOG: &str = "RUST_LOG";
}

/// Configuration defaults
pub mod defaults {
    /// Bind address
    pub const HOST: &str = "127.0.0.1";
    /// Bind port
    pub const HTTP_PORT: u16 = 8080;
    /// Classifier artifact path
    pub const MODEL_PATH: &str = "models/best_obesity_model.json";
    /// Label encoder artifact path
    pub const LABEL_ENCODER_PATH: &str = "models/label_encoder.json";
    /// Allow any origin
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
    /// Request body size limit in bytes; a survey submission is well under 1 KiB
    pub const MAX_REQUEST_BODY_BYTES: usize = 16 * 1024;
    /// Log level
    pub const LOG_LEVEL: &str = "info";
    /// Request id header
    pub const REQUEST_ID_HEADER: &str = "x-request-id";
}
