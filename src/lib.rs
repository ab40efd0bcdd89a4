// ABOUTME: Main library entry point for the Obesity Insight prediction service
// ABOUTME: Wires configuration, logging, presenters, and the HTTP surface around the pipeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Obesity Insight Server
//!
//! Predicts an obesity category from a sixteen-field lifestyle survey and
//! reports BMI alongside it.
//!
//! ## Architecture
//!
//! - **`obesity-core`**: error taxonomy, survey models, record schema, constants
//! - **`obesity-intelligence`**: BMI rules, record builder, artifact-backed
//!   classifiers, prediction pipeline
//! - **this crate**: configuration, logging, presenters, HTTP routes, binaries
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use obesity_insight_server::config::ServerConfig;
//! use obesity_insight_server::resources::ServerResources;
//! use obesity_insight_server::server;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = ServerResources::load(config);
//!     server::serve(resources).await
//! }
//! ```

/// Environment-driven server configuration
pub mod config;

/// Service-level constants: environment variable names and defaults
pub mod constants;

/// Result presenters (JSON and text)
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// HTTP middleware: CORS and request tracing
pub mod middleware;

/// Shared, read-only server state
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Router assembly and the serve loop
pub mod server;

pub use obesity_core::errors;
pub use obesity_core::models;
