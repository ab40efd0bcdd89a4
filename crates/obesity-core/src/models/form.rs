// ABOUTME: Input form schema: label, domain, and default value of every survey field
// ABOUTME: Lets any input surface (web form, CLI, API client) render the same form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{domains, form_defaults};
use crate::models::record::FeatureColumn;
use crate::models::survey::{Choice, Frequency, Gender, Transport, YesNo};
use serde::Serialize;

/// Accepted values for one field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldDomain {
    /// Pick one option
    Choice {
        /// Options in display order
        options: Vec<&'static str>,
    },
    /// Whole number in an inclusive range
    Integer {
        /// Lower bound
        min: i64,
        /// Upper bound
        max: i64,
    },
    /// Real number in an inclusive range
    Float {
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
        /// Input step
        step: f64,
    },
}

/// One field of the input form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    /// `RawInput` field name
    pub field: &'static str,
    /// Record column fed by the field
    pub column: &'static str,
    /// Human label
    pub label: &'static str,
    /// Accepted values
    pub domain: FieldDomain,
    /// Pre-filled value
    pub default: serde_json::Value,
}

fn choice<T: Choice>(
    column: FeatureColumn,
    label: &'static str,
    default: T,
) -> FieldSpec {
    FieldSpec {
        field: column.raw_field(),
        column: column.name(),
        label,
        domain: FieldDomain::Choice {
            options: T::option_names(),
        },
        default: serde_json::Value::from(default.as_str()),
    }
}

fn integer(
    column: FeatureColumn,
    label: &'static str,
    (min, max): (i64, i64),
    default: i64,
) -> FieldSpec {
    FieldSpec {
        field: column.raw_field(),
        column: column.name(),
        label,
        domain: FieldDomain::Integer { min, max },
        default: serde_json::Value::from(default),
    }
}

fn float(
    column: FeatureColumn,
    label: &'static str,
    (min, max, step): (f64, f64, f64),
    default: f64,
) -> FieldSpec {
    FieldSpec {
        field: column.raw_field(),
        column: column.name(),
        label,
        domain: FieldDomain::Float { min, max, step },
        default: serde_json::Value::from(default),
    }
}

/// The full form, one entry per record column, in training order
#[must_use]
pub fn form_schema() -> Vec<FieldSpec> {
    FeatureColumn::ALL
        .iter()
        .map(|column| field_spec(*column))
        .collect()
}

/// Form entry for a single column
#[must_use]
pub fn field_spec(column: FeatureColumn) -> FieldSpec {
    match column {
        FeatureColumn::Gender => choice(column, "Gender", Gender::Male),
        FeatureColumn::Age => integer(
            column,
            "Age (Years)",
            (domains::AGE_MIN, domains::AGE_MAX),
            form_defaults::AGE,
        ),
        FeatureColumn::Height => float(
            column,
            "Height (meters)",
            (
                domains::HEIGHT_MIN_M,
                domains::HEIGHT_MAX_M,
                form_defaults::HEIGHT_STEP,
            ),
            form_defaults::HEIGHT_M,
        ),
        FeatureColumn::Weight => float(
            column,
            "Weight (kg)",
            (
                domains::WEIGHT_MIN_KG,
                domains::WEIGHT_MAX_KG,
                form_defaults::WEIGHT_STEP,
            ),
            form_defaults::WEIGHT_KG,
        ),
        FeatureColumn::FamilyHistoryWithOverweight => {
            choice(column, "Family History with Overweight?", YesNo::Yes)
        }
        FeatureColumn::Favc => choice(column, "FAVC (High calorie food consumption)", YesNo::Yes),
        FeatureColumn::Fcvc => integer(
            column,
            "FCVC (Vegetable Consumption Level)",
            domains::FCVC_RANGE,
            form_defaults::FCVC,
        ),
        FeatureColumn::Ncp => integer(
            column,
            "NCP (Meals per Day)",
            domains::NCP_RANGE,
            form_defaults::NCP,
        ),
        FeatureColumn::Caec => choice(column, "CAEC (Eating between meals)", Frequency::Never),
        FeatureColumn::Smoke => choice(column, "SMOKE", YesNo::Yes),
        FeatureColumn::Ch2o => integer(
            column,
            "CH2O (Water Intake)",
            domains::CH2O_RANGE,
            form_defaults::CH2O,
        ),
        FeatureColumn::Scc => choice(column, "SCC (Calories monitoring)", YesNo::Yes),
        FeatureColumn::Faf => integer(
            column,
            "FAF (Physical Activity Frequency)",
            domains::FAF_RANGE,
            form_defaults::FAF,
        ),
        FeatureColumn::Tue => integer(
            column,
            "TUE (Tech device usage)",
            domains::TUE_RANGE,
            form_defaults::TUE,
        ),
        FeatureColumn::Calc => choice(column, "CALC (Alcohol Consumption)", Frequency::Never),
        FeatureColumn::Mtrans => choice(
            column,
            "MTRANS (Transportation mode)",
            Transport::PublicTransportation,
        ),
    }
}
