// ABOUTME: Feature record builder: validates raw survey input into the canonical record
// ABOUTME: Trust boundary in front of the classifier; every field is re-checked
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Feature Record Builder
//!
//! Input surfaces constrain values already, but the builder re-validates
//! everything before a record can reach the classifier. The first offending
//! field, in training column order, is reported by its `RawInput` name.

use obesity_core::constants::domains;
use obesity_core::errors::PipelineError;
use obesity_core::models::{Choice, FeatureColumn, FeatureRecord, RawInput};
use tracing::debug;

/// Builds [`FeatureRecord`]s from [`RawInput`]
pub struct FeatureRecordBuilder;

impl FeatureRecordBuilder {
    /// Validate and normalize raw input.
    ///
    /// Deterministic and side-effect free: identical input yields an
    /// identical record.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Validation` naming the first field outside its
    /// declared domain.
    pub fn build(raw: &RawInput) -> Result<FeatureRecord, PipelineError> {
        let record = FeatureRecord {
            gender: choice(FeatureColumn::Gender, &raw.gender)?,
            age: integer(
                FeatureColumn::Age,
                raw.age,
                (domains::AGE_MIN, domains::AGE_MAX),
            )?,
            height: real(
                FeatureColumn::Height,
                raw.height,
                (domains::HEIGHT_MIN_M, domains::HEIGHT_MAX_M),
            )?,
            weight: real(
                FeatureColumn::Weight,
                raw.weight,
                (domains::WEIGHT_MIN_KG, domains::WEIGHT_MAX_KG),
            )?,
            family_history_with_overweight: choice(
                FeatureColumn::FamilyHistoryWithOverweight,
                &raw.family_history,
            )?,
            favc: choice(FeatureColumn::Favc, &raw.favc)?,
            fcvc: integer(FeatureColumn::Fcvc, raw.fcvc, domains::FCVC_RANGE)?,
            ncp: integer(FeatureColumn::Ncp, raw.ncp, domains::NCP_RANGE)?,
            caec: choice(FeatureColumn::Caec, &raw.caec)?,
            smoke: choice(FeatureColumn::Smoke, &raw.smoke)?,
            ch2o: integer(FeatureColumn::Ch2o, raw.ch2o, domains::CH2O_RANGE)?,
            scc: choice(FeatureColumn::Scc, &raw.scc)?,
            faf: integer(FeatureColumn::Faf, raw.faf, domains::FAF_RANGE)?,
            tue: integer(FeatureColumn::Tue, raw.tue, domains::TUE_RANGE)?,
            calc: choice(FeatureColumn::Calc, &raw.calc)?,
            mtrans: choice(FeatureColumn::Mtrans, &raw.mtrans)?,
        };

        debug!(
            gender = %record.gender,
            age = record.age,
            "feature record built"
        );
        Ok(record)
    }
}

fn choice<T: Choice>(column: FeatureColumn, value: &str) -> Result<T, PipelineError> {
    T::parse(value).ok_or_else(|| {
        PipelineError::validation(
            column.raw_field(),
            format!(
                "'{value}' is not one of [{}]",
                T::option_names().join(", ")
            ),
        )
    })
}

fn integer(
    column: FeatureColumn,
    value: i64,
    (min, max): (i64, i64),
) -> Result<i64, PipelineError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(PipelineError::validation(
            column.raw_field(),
            format!("{value} is outside [{min}, {max}]"),
        ))
    }
}

fn real(column: FeatureColumn, value: f64, (min, max): (f64, f64)) -> Result<f64, PipelineError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(PipelineError::validation(
            column.raw_field(),
            format!("{value} is outside [{min}, {max}]"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use obesity_core::models::{Frequency, Gender, Transport, YesNo};

    fn scenario_input() -> RawInput {
        RawInput {
            gender: "Female".into(),
            age: 30,
            height: 1.65,
            weight: 95.0,
            family_history: "yes".into(),
            favc: "yes".into(),
            fcvc: 2,
            ncp: 3,
            caec: "Sometimes".into(),
            smoke: "no".into(),
            ch2o: 2,
            scc: "no".into(),
            faf: 0,
            tue: 1,
            calc: "no".into(),
            mtrans: "Automobile".into(),
        }
    }

    fn rejected_field(raw: &RawInput) -> &'static str {
        match FeatureRecordBuilder::build(raw) {
            Err(PipelineError::Validation { field, .. }) => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_builds_typed_record() {
        let record = FeatureRecordBuilder::build(&scenario_input()).unwrap();
        assert_eq!(record.gender, Gender::Female);
        assert_eq!(record.family_history_with_overweight, YesNo::Yes);
        assert_eq!(record.caec, Frequency::Sometimes);
        assert_eq!(record.calc, Frequency::Never);
        assert_eq!(record.mtrans, Transport::Automobile);
        assert!((record.weight - 95.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_build_is_deterministic() {
        let raw = scenario_input();
        let first = serde_json::to_vec(&FeatureRecordBuilder::build(&raw).unwrap()).unwrap();
        let second = serde_json::to_vec(&FeatureRecordBuilder::build(&raw).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_form_defaults_are_valid() {
        assert!(FeatureRecordBuilder::build(&RawInput::default()).is_ok());
    }

    #[test]
    fn test_rejects_integer_fields_outside_domain() {
        let cases: [(fn(&mut RawInput), &str); 9] = [
            (|r| r.age = 0, "age"),
            (|r| r.age = 121, "age"),
            (|r| r.fcvc = 4, "fcvc"),
            (|r| r.fcvc = 0, "fcvc"),
            (|r| r.ncp = 5, "ncp"),
            (|r| r.ch2o = 0, "ch2o"),
            (|r| r.faf = -1, "faf"),
            (|r| r.faf = 4, "faf"),
            (|r| r.tue = 3, "tue"),
        ];
        for (mutate, field) in cases {
            let mut raw = scenario_input();
            mutate(&mut raw);
            assert_eq!(rejected_field(&raw), field);
        }
    }

    #[test]
    fn test_rejects_real_fields_outside_domain() {
        let cases: [(fn(&mut RawInput), &str); 6] = [
            (|r| r.height = 0.49, "height"),
            (|r| r.height = 2.51, "height"),
            (|r| r.height = f64::NAN, "height"),
            (|r| r.weight = 9.99, "weight"),
            (|r| r.weight = 300.01, "weight"),
            (|r| r.weight = f64::INFINITY, "weight"),
        ];
        for (mutate, field) in cases {
            let mut raw = scenario_input();
            mutate(&mut raw);
            assert_eq!(rejected_field(&raw), field);
        }
    }

    #[test]
    fn test_accepts_inclusive_bounds() {
        let mut raw = scenario_input();
        raw.age = 120;
        raw.height = 0.5;
        raw.weight = 300.0;
        raw.faf = 0;
        raw.tue = 2;
        assert!(FeatureRecordBuilder::build(&raw).is_ok());
    }

    #[test]
    fn test_rejects_unknown_categories() {
        let cases: [(fn(&mut RawInput), &str); 8] = [
            (|r| r.gender = "female".into(), "gender"),
            (|r| r.family_history = "maybe".into(), "family_history"),
            (|r| r.favc = String::new(), "favc"),
            (|r| r.caec = "Never".into(), "caec"),
            (|r| r.smoke = "YES".into(), "smoke"),
            (|r| r.scc = "1".into(), "scc"),
            (|r| r.calc = "Often".into(), "calc"),
            (|r| r.mtrans = "Public Transportation".into(), "mtrans"),
        ];
        for (mutate, field) in cases {
            let mut raw = scenario_input();
            mutate(&mut raw);
            assert_eq!(rejected_field(&raw), field);
        }
    }

    #[test]
    fn test_reports_first_field_in_column_order() {
        let mut raw = scenario_input();
        raw.mtrans = "Teleport".into();
        raw.age = 0;
        assert_eq!(rejected_field(&raw), "age");
    }
}
