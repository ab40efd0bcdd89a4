// ABOUTME: Categorical survey answers with their exact training-set spellings
// ABOUTME: Gender, yes/no, eating/drinking frequency, and transportation mode enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed set of answers with a fixed textual spelling.
///
/// The spelling is case-sensitive: it is the category value the classifier
/// was trained on, so `"sometimes"` is not a valid `Frequency`.
pub trait Choice: Copy + Sized + 'static {
    /// Every option, in the order the input form presents them
    const OPTIONS: &'static [Self];

    /// Training-set spelling
    fn as_str(self) -> &'static str;

    /// Parse an exact spelling
    #[must_use]
    fn parse(value: &str) -> Option<Self> {
        Self::OPTIONS
            .iter()
            .copied()
            .find(|option| option.as_str() == value)
    }

    /// All spellings, in form order
    #[must_use]
    fn option_names() -> Vec<&'static str> {
        Self::OPTIONS.iter().map(|option| option.as_str()).collect()
    }
}

/// Biological sex as recorded in the survey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// `Male`
    Male,
    /// `Female`
    Female,
}

impl Choice for Gender {
    const OPTIONS: &'static [Self] = &[Self::Male, Self::Female];

    fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Binary survey answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    /// `yes`
    Yes,
    /// `no`
    No,
}

impl Choice for YesNo {
    const OPTIONS: &'static [Self] = &[Self::Yes, Self::No];

    fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

/// How often something happens (CAEC, CALC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    /// `no`
    #[serde(rename = "no")]
    Never,
    /// `Sometimes`
    Sometimes,
    /// `Frequently`
    Frequently,
    /// `Always`
    Always,
}

impl Choice for Frequency {
    const OPTIONS: &'static [Self] = &[
        Self::Never,
        Self::Sometimes,
        Self::Frequently,
        Self::Always,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Never => "no",
            Self::Sometimes => "Sometimes",
            Self::Frequently => "Frequently",
            Self::Always => "Always",
        }
    }
}

/// Usual transportation mode (MTRANS)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transport {
    /// `Public_Transportation`
    #[serde(rename = "Public_Transportation")]
    PublicTransportation,
    /// `Automobile`
    Automobile,
    /// `Walking`
    Walking,
    /// `Motorbike`
    Motorbike,
    /// `Bike`
    Bike,
}

impl Choice for Transport {
    const OPTIONS: &'static [Self] = &[
        Self::PublicTransportation,
        Self::Automobile,
        Self::Walking,
        Self::Motorbike,
        Self::Bike,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::PublicTransportation => "Public_Transportation",
            Self::Automobile => "Automobile",
            Self::Walking => "Walking",
            Self::Motorbike => "Motorbike",
            Self::Bike => "Bike",
        }
    }
}

macro_rules! display_as_choice {
    ($($ty:ty),+) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })+
    };
}

display_as_choice!(Gender, YesNo, Frequency, Transport);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Frequency::parse("Sometimes"), Some(Frequency::Sometimes));
        assert_eq!(Frequency::parse("sometimes"), None);
        assert_eq!(Frequency::parse("no"), Some(Frequency::Never));
        assert_eq!(YesNo::parse("Yes"), None);
    }

    #[test]
    fn test_serde_uses_training_spelling() {
        assert_eq!(
            serde_json::to_string(&Transport::PublicTransportation).unwrap(),
            "\"Public_Transportation\""
        );
        assert_eq!(serde_json::to_string(&Frequency::Never).unwrap(), "\"no\"");
        assert_eq!(serde_json::to_string(&YesNo::Yes).unwrap(), "\"yes\"");
    }

    #[test]
    fn test_option_names_follow_form_order() {
        assert_eq!(Gender::option_names(), vec!["Male", "Female"]);
        assert_eq!(YesNo::option_names(), vec!["yes", "no"]);
        assert_eq!(Transport::option_names().len(), 5);
    }
}
