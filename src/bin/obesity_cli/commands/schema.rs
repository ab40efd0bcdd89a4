// ABOUTME: Schema command for obesity-cli
// ABOUTME: Prints every survey field with its label, domain, and form default
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use obesity_core::models::form_schema;
use obesity_insight_server::formatters::OutputFormat;

use crate::helpers::display::print_formatted;

pub fn run(format: OutputFormat) -> Result<()> {
    print_formatted(&form_schema(), format)
}
