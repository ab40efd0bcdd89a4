// ABOUTME: Environment configuration management for the prediction server
// ABOUTME: Reads bind address, artifact paths, CORS, and HTTP limits from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use crate::constants::{defaults, env_vars};
use anyhow::{anyhow, Context, Result};
use obesity_intelligence::artifacts::ArtifactPaths;
use serde::{Deserialize, Serialize};
use std::env;
use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational (default)
    #[default]
    Info,
    /// Debugging detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        })
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        })
    }
}

/// Where the model artifacts are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactConfig {
    /// Classifier artifact
    pub model_path: PathBuf,
    /// Label encoder artifact
    pub label_encoder_path: PathBuf,
}

/// Cross-origin settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// `*` or a comma-separated origin list
    pub allowed_origins: String,
}

/// Per-request HTTP limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpLimits {
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
    /// Maximum accepted request body
    pub max_request_body_bytes: usize,
}

impl HttpLimits {
    /// Timeout as a `Duration`
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Model artifacts
    pub artifacts: ArtifactConfig,
    /// CORS settings
    pub cors: CorsConfig,
    /// HTTP limits
    pub http: HttpLimits,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            environment: Environment::default(),
            log_level: LogLevel::default(),
            artifacts: ArtifactConfig {
                model_path: PathBuf::from(defaults::MODEL_PATH),
                label_encoder_path: PathBuf::from(defaults::LABEL_ENCODER_PATH),
            },
            cors: CorsConfig {
                allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
            },
            http: HttpLimits {
                request_timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
                max_request_body_bytes: defaults::MAX_REQUEST_BODY_BYTES,
            },
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse or the resulting
    /// configuration fails validation
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: env_var_or(env_vars::HOST, defaults::HOST),
            http_port: parse_env(env_vars::HTTP_PORT, defaults::HTTP_PORT)?,
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or(
                env_vars::RUST_LOG,
                defaults::LOG_LEVEL,
            )),
            artifacts: ArtifactConfig {
                model_path: PathBuf::from(env_var_or(env_vars::MODEL_PATH, defaults::MODEL_PATH)),
                label_encoder_path: PathBuf::from(env_var_or(
                    env_vars::LABEL_ENCODER_PATH,
                    defaults::LABEL_ENCODER_PATH,
                )),
            },
            cors: CorsConfig {
                allowed_origins: env_var_or(
                    env_vars::CORS_ALLOWED_ORIGINS,
                    defaults::CORS_ALLOWED_ORIGINS,
                ),
            },
            http: HttpLimits {
                request_timeout_secs: parse_env(
                    env_vars::REQUEST_TIMEOUT_SECS,
                    defaults::REQUEST_TIMEOUT_SECS,
                )?,
                max_request_body_bytes: parse_env(
                    env_vars::MAX_REQUEST_BODY_BYTES,
                    defaults::MAX_REQUEST_BODY_BYTES,
                )?,
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for port 0, empty artifact paths, a zero timeout, or
    /// a zero body limit
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(anyhow!("HTTP_PORT must be between 1 and 65535"));
        }
        if self.host.trim().is_empty() {
            return Err(anyhow!("HOST cannot be empty"));
        }
        if self.artifacts.model_path.as_os_str().is_empty() {
            return Err(anyhow!("MODEL_PATH cannot be empty"));
        }
        if self.artifacts.label_encoder_path.as_os_str().is_empty() {
            return Err(anyhow!("LABEL_ENCODER_PATH cannot be empty"));
        }
        if self.http.request_timeout_secs == 0 {
            return Err(anyhow!("REQUEST_TIMEOUT_SECS must be greater than zero"));
        }
        if self.http.max_request_body_bytes == 0 {
            return Err(anyhow!("MAX_REQUEST_BODY_BYTES must be greater than zero"));
        }
        Ok(())
    }

    /// Artifact locations for the model loader
    #[must_use]
    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths::new(
            self.artifacts.model_path.clone(),
            self.artifacts.label_encoder_path.clone(),
        )
    }

    /// `host:port` to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Obesity Insight Server Configuration:\n\
             - Bind Address: {}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Model Artifact: {}\n\
             - Label Encoder Artifact: {}\n\
             - CORS Origins: {}\n\
             - Request Timeout: {}s\n\
             - Max Request Body: {} bytes",
            self.bind_address(),
            self.environment,
            self.log_level,
            self.artifacts.model_path.display(),
            self.artifacts.label_encoder_path.display(),
            self.cors.allowed_origins,
            self.http.request_timeout_secs,
            self.http.max_request_body_bytes,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: StdError + Send + Sync + 'static,
{
    env::var(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key} value: {value}"))
    })
}
