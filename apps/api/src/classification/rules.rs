//! Fit category rules — the fixed threshold table the original ontology
//! reasoner inferred class membership from, evaluated directly.
//!
//! Each rule is a conjunction of inclusive comparisons against one or more
//! trait scores. Categories are independent: an applicant can land in zero,
//! one, or several at once.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::classification::scores::{PersonalityTrait, ScoreVector};
use crate::errors::AppError;

/// The five fit categories. Serialized ids match the ontology class names
/// stored alongside applicants, so they are stable identifiers, not display
/// strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FitCategory {
    AnalyticalCreative,
    TechnicalStructured,
    InterpersonalOutgoing,
    PeopleSupport,
    ContentWriting,
}

impl FitCategory {
    /// Rule-table order. Also the order classification results are returned in.
    pub const ALL: [FitCategory; 5] = [
        FitCategory::AnalyticalCreative,
        FitCategory::TechnicalStructured,
        FitCategory::InterpersonalOutgoing,
        FitCategory::PeopleSupport,
        FitCategory::ContentWriting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FitCategory::AnalyticalCreative => "AnalyticalCreative",
            FitCategory::TechnicalStructured => "TechnicalStructured",
            FitCategory::InterpersonalOutgoing => "InterpersonalOutgoing",
            FitCategory::PeopleSupport => "PeopleSupport",
            FitCategory::ContentWriting => "ContentWriting",
        }
    }
}

impl fmt::Display for FitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FitCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| AppError::UnknownCategory(s.to_string()))
    }
}

/// Direction of a threshold comparison. Both are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    AtLeast,
    AtMost,
}

/// A single inclusive comparison between one trait score and a constant.
#[derive(Debug, Clone, Copy)]
pub struct Condition {
    pub scored_trait: PersonalityTrait,
    pub comparator: Comparator,
    pub threshold: f64,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self.comparator {
            Comparator::AtLeast => ">=",
            Comparator::AtMost => "<=",
        };
        write!(f, "{} {op} {:.1}", self.scored_trait.as_str(), self.threshold)
    }
}

impl Condition {
    fn holds(&self, scores: &ScoreVector) -> bool {
        let v = scores.get(self.scored_trait);
        match self.comparator {
            Comparator::AtLeast => v >= self.threshold,
            Comparator::AtMost => v <= self.threshold,
        }
    }
}

const fn at_least(t: PersonalityTrait, threshold: f64) -> Condition {
    Condition {
        scored_trait: t,
        comparator: Comparator::AtLeast,
        threshold,
    }
}

const fn at_most(t: PersonalityTrait, threshold: f64) -> Condition {
    Condition {
        scored_trait: t,
        comparator: Comparator::AtMost,
        threshold,
    }
}

/// The fixed rule table. Edited only by redeploying; never mutated at runtime.
pub static RULES: [(FitCategory, &[Condition]); 5] = [
    (
        FitCategory::AnalyticalCreative,
        &[
            at_least(PersonalityTrait::Openness, 4.0),
            at_least(PersonalityTrait::Conscientiousness, 4.0),
            at_most(PersonalityTrait::Neuroticism, 2.5),
        ],
    ),
    (
        FitCategory::TechnicalStructured,
        &[
            at_least(PersonalityTrait::Conscientiousness, 4.2),
            at_most(PersonalityTrait::Neuroticism, 2.0),
        ],
    ),
    (
        FitCategory::InterpersonalOutgoing,
        &[
            at_least(PersonalityTrait::Extraversion, 4.0),
            at_least(PersonalityTrait::Agreeableness, 3.5),
        ],
    ),
    (
        FitCategory::PeopleSupport,
        &[
            at_least(PersonalityTrait::Agreeableness, 4.2),
            at_least(PersonalityTrait::Extraversion, 3.5),
        ],
    ),
    (
        FitCategory::ContentWriting,
        &[
            at_least(PersonalityTrait::Openness, 4.0),
            at_least(PersonalityTrait::Conscientiousness, 3.5),
        ],
    ),
];

/// Returns the conditions for one category, for the metadata endpoint.
pub fn conditions_for(category: FitCategory) -> &'static [Condition] {
    RULES
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, conds)| *conds)
        .unwrap_or(&[])
}

/// Evaluates every rule against the given scores and returns the matching
/// categories in table order. Validates the score vector first; no rule is
/// evaluated against out-of-domain input.
pub fn classify(scores: &ScoreVector) -> Result<Vec<FitCategory>, AppError> {
    scores.validate()?;
    Ok(RULES
        .iter()
        .filter(|(_, conds)| conds.iter().all(|c| c.holds(scores)))
        .map(|(category, _)| *category)
        .collect())
}
