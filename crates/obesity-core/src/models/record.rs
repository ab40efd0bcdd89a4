// ABOUTME: Canonical single-row feature record and its named column schema
// ABOUTME: Column names and order are the contract with the trained classifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Feature Record
//!
//! The classifier was trained on a table with sixteen named columns in a fixed
//! order. [`FeatureColumn`] spells that contract out; [`FeatureRecord::value`]
//! matches every column exhaustively, so adding a column without wiring it into
//! the record does not compile. Artifact loaders compare their declared column
//! list against [`FeatureColumn::ALL`] at load time.

use crate::models::survey::{Choice, Frequency, Gender, Transport, YesNo};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Number of columns in the training schema
pub const FEATURE_COUNT: usize = 16;

/// Whether a column holds a number or a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Integer or real value
    Numeric,
    /// One of a closed set of spellings
    Categorical,
}

/// One column of the training schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureColumn {
    /// `Gender`
    Gender,
    /// `Age`
    Age,
    /// `Height`
    Height,
    /// `Weight`
    Weight,
    /// `family_history_with_overweight`
    FamilyHistoryWithOverweight,
    /// `FAVC`
    Favc,
    /// `FCVC`
    Fcvc,
    /// `NCP`
    Ncp,
    /// `CAEC`
    Caec,
    /// `SMOKE`
    Smoke,
    /// `CH2O`
    Ch2o,
    /// `SCC`
    Scc,
    /// `FAF`
    Faf,
    /// `TUE`
    Tue,
    /// `CALC`
    Calc,
    /// `MTRANS`
    Mtrans,
}

impl FeatureColumn {
    /// Every column in training order
    pub const ALL: [Self; FEATURE_COUNT] = [
        Self::Gender,
        Self::Age,
        Self::Height,
        Self::Weight,
        Self::FamilyHistoryWithOverweight,
        Self::Favc,
        Self::Fcvc,
        Self::Ncp,
        Self::Caec,
        Self::Smoke,
        Self::Ch2o,
        Self::Scc,
        Self::Faf,
        Self::Tue,
        Self::Calc,
        Self::Mtrans,
    ];

    /// Column name in the training table
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gender => "Gender",
            Self::Age => "Age",
            Self::Height => "Height",
            Self::Weight => "Weight",
            Self::FamilyHistoryWithOverweight => "family_history_with_overweight",
            Self::Favc => "FAVC",
            Self::Fcvc => "FCVC",
            Self::Ncp => "NCP",
            Self::Caec => "CAEC",
            Self::Smoke => "SMOKE",
            Self::Ch2o => "CH2O",
            Self::Scc => "SCC",
            Self::Faf => "FAF",
            Self::Tue => "TUE",
            Self::Calc => "CALC",
            Self::Mtrans => "MTRANS",
        }
    }

    /// Name of the `RawInput` field feeding this column
    #[must_use]
    pub const fn raw_field(self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::Age => "age",
            Self::Height => "height",
            Self::Weight => "weight",
            Self::FamilyHistoryWithOverweight => "family_history",
            Self::Favc => "favc",
            Self::Fcvc => "fcvc",
            Self::Ncp => "ncp",
            Self::Caec => "caec",
            Self::Smoke => "smoke",
            Self::Ch2o => "ch2o",
            Self::Scc => "scc",
            Self::Faf => "faf",
            Self::Tue => "tue",
            Self::Calc => "calc",
            Self::Mtrans => "mtrans",
        }
    }

    /// Numeric or categorical
    #[must_use]
    pub const fn kind(self) -> ColumnKind {
        match self {
            Self::Age
            | Self::Height
            | Self::Weight
            | Self::Fcvc
            | Self::Ncp
            | Self::Ch2o
            | Self::Faf
            | Self::Tue => ColumnKind::Numeric,
            Self::Gender
            | Self::FamilyHistoryWithOverweight
            | Self::Favc
            | Self::Caec
            | Self::Smoke
            | Self::Scc
            | Self::Calc
            | Self::Mtrans => ColumnKind::Categorical,
        }
    }

    /// Allowed spellings for categorical columns
    #[must_use]
    pub fn categories(self) -> Option<Vec<&'static str>> {
        match self {
            Self::Gender => Some(Gender::option_names()),
            Self::FamilyHistoryWithOverweight | Self::Favc | Self::Smoke | Self::Scc => {
                Some(YesNo::option_names())
            }
            Self::Caec | Self::Calc => Some(Frequency::option_names()),
            Self::Mtrans => Some(Transport::option_names()),
            _ => None,
        }
    }

    /// Position in the training order
    #[must_use]
    pub fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|column| *column == self)
            .unwrap_or_default()
    }

    /// Look a column up by its training name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|column| column.name() == name)
    }
}

impl fmt::Display for FeatureColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single cell of the record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    /// Whole number
    Integer(i64),
    /// Real number
    Float(f64),
    /// Category spelling
    Category(&'static str),
}

impl FeatureValue {
    /// Numeric value, if this is a number
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            // Safe: survey integers are small (at most 120)
            #[allow(clippy::cast_precision_loss)]
            Self::Integer(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            Self::Category(_) => None,
        }
    }

    /// Category spelling, if this is a category
    #[must_use]
    pub const fn as_category(&self) -> Option<&'static str> {
        match self {
            Self::Category(value) => Some(*value),
            Self::Integer(_) | Self::Float(_) => None,
        }
    }
}

impl Serialize for FeatureValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Integer(value) => serializer.serialize_i64(*value),
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::Category(value) => serializer.serialize_str(value),
        }
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Category(value) => f.write_str(value),
        }
    }
}

/// Validated single-row record submitted to the classifier.
///
/// Build it with `FeatureRecordBuilder` from the intelligence crate; values
/// written here directly skip domain validation. Serializes as a JSON object
/// whose keys follow [`FeatureColumn::ALL`].
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    /// `Gender`
    pub gender: Gender,
    /// `Age`
    pub age: i64,
    /// `Height` in meters
    pub height: f64,
    /// `Weight` in kilograms
    pub weight: f64,
    /// `family_history_with_overweight`
    pub family_history_with_overweight: YesNo,
    /// `FAVC`
    pub favc: YesNo,
    /// `FCVC`
    pub fcvc: i64,
    /// `NCP`
    pub ncp: i64,
    /// `CAEC`
    pub caec: Frequency,
    /// `SMOKE`
    pub smoke: YesNo,
    /// `CH2O`
    pub ch2o: i64,
    /// `SCC`
    pub scc: YesNo,
    /// `FAF`
    pub faf: i64,
    /// `TUE`
    pub tue: i64,
    /// `CALC`
    pub calc: Frequency,
    /// `MTRANS`
    pub mtrans: Transport,
}

impl FeatureRecord {
    /// Value of one column
    #[must_use]
    pub fn value(&self, column: FeatureColumn) -> FeatureValue {
        match column {
            FeatureColumn::Gender => FeatureValue::Category(self.gender.as_str()),
            FeatureColumn::Age => FeatureValue::Integer(self.age),
            FeatureColumn::Height => FeatureValue::Float(self.height),
            FeatureColumn::Weight => FeatureValue::Float(self.weight),
            FeatureColumn::FamilyHistoryWithOverweight => {
                FeatureValue::Category(self.family_history_with_overweight.as_str())
            }
            FeatureColumn::Favc => FeatureValue::Category(self.favc.as_str()),
            FeatureColumn::Fcvc => FeatureValue::Integer(self.fcvc),
            FeatureColumn::Ncp => FeatureValue::Integer(self.ncp),
            FeatureColumn::Caec => FeatureValue::Category(self.caec.as_str()),
            FeatureColumn::Smoke => FeatureValue::Category(self.smoke.as_str()),
            FeatureColumn::Ch2o => FeatureValue::Integer(self.ch2o),
            FeatureColumn::Scc => FeatureValue::Category(self.scc.as_str()),
            FeatureColumn::Faf => FeatureValue::Integer(self.faf),
            FeatureColumn::Tue => FeatureValue::Integer(self.tue),
            FeatureColumn::Calc => FeatureValue::Category(self.calc.as_str()),
            FeatureColumn::Mtrans => FeatureValue::Category(self.mtrans.as_str()),
        }
    }

    /// `(column, value)` pairs in training order
    pub fn iter(&self) -> impl Iterator<Item = (FeatureColumn, FeatureValue)> + '_ {
        FeatureColumn::ALL
            .iter()
            .map(move |column| (*column, self.value(*column)))
    }
}

impl Serialize for FeatureRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FEATURE_COUNT))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column.name(), &value)?;
        }
        map.end()
    }
}
