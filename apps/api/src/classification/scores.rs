//! Big Five score vector — the five normalized trait scores every
//! classification decision is made from.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Lowest and highest value a trait score may take, inclusive.
pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 5.0;

/// One of the five Big Five personality traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalityTrait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl PersonalityTrait {
    pub const ALL: [PersonalityTrait; 5] = [
        PersonalityTrait::Openness,
        PersonalityTrait::Conscientiousness,
        PersonalityTrait::Extraversion,
        PersonalityTrait::Agreeableness,
        PersonalityTrait::Neuroticism,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonalityTrait::Openness => "openness",
            PersonalityTrait::Conscientiousness => "conscientiousness",
            PersonalityTrait::Extraversion => "extraversion",
            PersonalityTrait::Agreeableness => "agreeableness",
            PersonalityTrait::Neuroticism => "neuroticism",
        }
    }
}

/// An applicant's five trait scores, each on the 0.0–5.0 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreVector {
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

impl ScoreVector {
    pub fn get(&self, t: PersonalityTrait) -> f64 {
        match t {
            PersonalityTrait::Openness => self.openness,
            PersonalityTrait::Conscientiousness => self.conscientiousness,
            PersonalityTrait::Extraversion => self.extraversion,
            PersonalityTrait::Agreeableness => self.agreeableness,
            PersonalityTrait::Neuroticism => self.neuroticism,
        }
    }

    /// Checks every trait is within [0.0, 5.0]. Out-of-domain scores are
    /// rejected, never clamped; the error names the offending trait.
    pub fn validate(&self) -> Result<(), AppError> {
        for t in PersonalityTrait::ALL {
            let v = self.get(t);
            if !v.is_finite() || !(SCORE_MIN..=SCORE_MAX).contains(&v) {
                return Err(AppError::Validation(format!(
                    "{} score {v} is outside [{SCORE_MIN}, {SCORE_MAX}]",
                    t.as_str()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(o: f64, c: f64, e: f64, a: f64, n: f64) -> ScoreVector {
        ScoreVector {
            openness: o,
            conscientiousness: c,
            extraversion: e,
            agreeableness: a,
            neuroticism: n,
        }
    }

    #[test]
    fn test_in_domain_scores_validate() {
        assert!(scores(4.5, 4.2, 3.0, 3.8, 2.0).validate().is_ok());
    }

    #[test]
    fn test_domain_bounds_are_inclusive() {
        assert!(scores(0.0, 0.0, 0.0, 0.0, 0.0).validate().is_ok());
        assert!(scores(5.0, 5.0, 5.0, 5.0, 5.0).validate().is_ok());
    }

    #[test]
    fn test_out_of_domain_score_names_the_trait() {
        let err = scores(4.0, 4.0, 3.0, 3.5, 5.5).validate().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("neuroticism"), "got: {msg}");
        assert!(msg.contains("5.5"), "got: {msg}");
    }

    #[test]
    fn test_negative_score_rejected() {
        let err = scores(-0.1, 4.0, 3.0, 3.5, 2.0).validate().unwrap_err();
        assert!(err.to_string().contains("openness"));
    }

    #[test]
    fn test_nan_rejected() {
        assert!(scores(f64::NAN, 4.0, 3.0, 3.5, 2.0).validate().is_err());
    }
}
