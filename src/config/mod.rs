// ABOUTME: Configuration management module for the prediction server
// ABOUTME: Environment-only configuration with validation and a log-friendly summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! All settings come from environment variables (see [`environment`]).
//! Command-line flags on the binaries override individual values after loading.

/// Environment and server configuration
pub mod environment;

pub use environment::{
    ArtifactConfig, CorsConfig, Environment, HttpLimits, LogLevel, ServerConfig,
};
