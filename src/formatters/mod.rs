// ABOUTME: Result presenter: renders reports, BMI results, and the form schema
// ABOUTME: Supports JSON (API default) and an aligned plain-text summary for terminals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! Every presentable value is `Serialize` for JSON and implements
//! [`TextSummary`] for the text format. A rendered report always shows the
//! predicted label, its display color, and the echoed input record.

use chrono::SecondsFormat;
use clap::ValueEnum;
use obesity_core::errors::{AppError, ErrorCode};
use obesity_core::models::{BmiResult, FieldDomain, FieldSpec, PredictionReport};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty JSON (default)
    #[default]
    Json,
    /// Aligned plain-text summary
    Text,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Json` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Self::Text,
            _ => Self::Json,
        }
    }

    /// Get the MIME content type for this format
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Text => "text/plain; charset=utf-8",
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formatted output containing the serialized data and metadata
#[derive(Debug, Clone)]
pub struct FormattedOutput {
    /// The rendered data
    pub data: String,
    /// The format used
    pub format: OutputFormat,
    /// The MIME content type
    pub content_type: &'static str,
}

/// Error type for formatting operations
#[derive(Debug, Clone, Error)]
#[error("Format error ({format}): {message}")]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl From<FormatError> for AppError {
    fn from(error: FormatError) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// Human-readable rendering
pub trait TextSummary {
    /// Multi-line text block
    fn text_summary(&self) -> String;
}

/// Render a value in the requested format
///
/// # Errors
///
/// Returns `FormatError` if JSON serialization fails
pub fn format_output<T: Serialize + TextSummary>(
    data: &T,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        })?,
        OutputFormat::Text => data.text_summary(),
    };

    Ok(FormattedOutput {
        data,
        format,
        content_type: format.content_type(),
    })
}

/// Writes `label: value` rows with the values aligned in one column
struct Rows {
    rows: Vec<(String, String)>,
}

impl Rows {
    const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    fn row(&mut self, label: impl Into<String>, value: impl fmt::Display) -> &mut Self {
        self.rows.push((label.into(), value.to_string()));
        self
    }

    fn render(&self, indent: &str, out: &mut String) {
        let width = self.rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        for (label, value) in &self.rows {
            out.push_str(&format!("{indent}{label:<width$}  {value}\n"));
        }
    }
}

impl TextSummary for PredictionReport {
    fn text_summary(&self) -> String {
        let mut out = String::new();
        let highlights = &self.highlights;

        Rows::new()
            .row(
                "Prediction",
                format!(
                    "{} ({})",
                    self.prediction.predicted_label, self.prediction.display_color
                ),
            )
            .row("Class id", self.prediction.predicted_class_id)
            .row("BMI", self.bmi)
            .row("Age", highlights.age)
            .row("Gender", highlights.gender)
            .row("Meals per day", highlights.meals_per_day)
            .row("Water intake", highlights.water_intake)
            .row("Physical activity", highlights.physical_activity)
            .row(
                "Generated at",
                self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            )
            .render("", &mut out);

        out.push_str("\nInput record\n");
        let mut input = Rows::new();
        for (column, value) in self.input.iter() {
            input.row(column.name(), value);
        }
        input.render("  ", &mut out);
        out
    }
}

impl TextSummary for BmiResult {
    fn text_summary(&self) -> String {
        format!("BMI {self}\n")
    }
}

impl TextSummary for Vec<FieldSpec> {
    fn text_summary(&self) -> String {
        let mut out = String::new();
        let mut rows = Rows::new();
        for spec in self {
            let domain = match &spec.domain {
                FieldDomain::Choice { options } => options.join(" | "),
                FieldDomain::Integer { min, max } => format!("integer {min}..={max}"),
                FieldDomain::Float { min, max, step } => {
                    format!("number {min}..={max} step {step}")
                }
            };
            rows.row(
                spec.field,
                format!("{} [{domain}] default {}", spec.label, spec.default),
            );
        }
        rows.render("", &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use obesity_core::models::{form_schema, BmiStatus};

    #[test]
    fn test_format_param_parsing() {
        assert_eq!(OutputFormat::from_str_param("TEXT"), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str_param("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str_param("yaml"), OutputFormat::Json);
    }

    #[test]
    fn test_bmi_renders_both_formats() {
        let bmi = BmiResult {
            value: 24.221_453_287_197_235,
            status: BmiStatus::Normal,
        };
        let text = format_output(&bmi, OutputFormat::Text).unwrap();
        assert_eq!(text.data, "BMI 24.22 (Normal)\n");
        assert_eq!(text.content_type, "text/plain; charset=utf-8");

        let json = format_output(&bmi, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json.data).unwrap();
        assert_eq!(value["status"], "Normal");
    }

    #[test]
    fn test_format_error_becomes_serialization_error() {
        let error = AppError::from(FormatError {
            message: "unsupported value".to_owned(),
            format: OutputFormat::Json,
        });
        assert_eq!(error.code, ErrorCode::SerializationError);
        assert_eq!(error.http_status(), 500);
        assert!(error.message.contains("unsupported value"));
        assert!(error.source.is_some());
    }

    #[test]
    fn test_schema_text_lists_every_field() {
        let text = format_output(&form_schema(), OutputFormat::Text).unwrap().data;
        assert_eq!(text.lines().count(), 16);
        assert!(text.contains("Public_Transportation | Automobile"));
        assert!(text.contains("integer 1..=120"));
    }
}
