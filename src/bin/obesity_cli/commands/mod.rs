// ABOUTME: Re-exports command modules for obesity-cli
// ABOUTME: Provides the predict, bmi, schema, and check-artifacts commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod bmi;
pub mod check_artifacts;
pub mod predict;
pub mod schema;
