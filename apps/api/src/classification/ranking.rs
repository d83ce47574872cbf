//! Applicant ranking — scores a batch of applicants against one target job
//! and flags the top slice.
//!
//! Weighted composite: 40% personality match against the job's ideal Big Five
//! profile, 40% required-skill coverage, 20% years of experience.

use serde::{Deserialize, Serialize};

use crate::classification::scores::{PersonalityTrait, ScoreVector};
use crate::errors::AppError;

/// Ideal Big Five profiles per job, research-derived. Jobs without a profile
/// score 0 on the personality component.
pub static JOB_PERSONALITY_PROFILES: [(&str, ScoreVector); 4] = [
    (
        "DataScientist",
        ScoreVector {
            openness: 5.0,
            conscientiousness: 4.5,
            extraversion: 3.0,
            agreeableness: 3.5,
            neuroticism: 2.0,
        },
    ),
    (
        "DataAnalyst",
        ScoreVector {
            openness: 4.5,
            conscientiousness: 4.5,
            extraversion: 3.0,
            agreeableness: 4.0,
            neuroticism: 2.0,
        },
    ),
    (
        "MarketingManager",
        ScoreVector {
            openness: 4.5,
            conscientiousness: 4.0,
            extraversion: 4.5,
            agreeableness: 4.0,
            neuroticism: 2.0,
        },
    ),
    (
        "SoftwareEngineer",
        ScoreVector {
            openness: 4.5,
            conscientiousness: 4.5,
            extraversion: 3.0,
            agreeableness: 3.5,
            neuroticism: 2.0,
        },
    ),
];

pub fn ideal_profile(job: &str) -> Option<&'static ScoreVector> {
    JOB_PERSONALITY_PROFILES
        .iter()
        .find(|(name, _)| *name == job)
        .map(|(_, profile)| profile)
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicantProfile {
    pub name: String,
    pub scores: ScoreVector,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RankRequest {
    /// Job identifier, e.g. "DataScientist".
    pub job: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub applicants: Vec<ApplicantProfile>,
    /// Top slice to flag, in percent. Defaults to 10.
    pub top_percent: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedApplicant {
    pub name: String,
    pub personality_match: f64,
    pub skills_match: f64,
    pub experience_score: f64,
    pub total_score: f64,
    pub in_top_percent: bool,
}

/// Personality match 0–100: mean absolute distance from the ideal profile,
/// normalized by the maximum per-trait distance of 4, inverted.
pub fn personality_match(scores: &ScoreVector, ideal: &ScoreVector) -> f64 {
    let total_diff: f64 = PersonalityTrait::ALL
        .into_iter()
        .map(|t| (scores.get(t) - ideal.get(t)).abs() / 4.0)
        .sum();
    let avg_diff = total_diff / PersonalityTrait::ALL.len() as f64;
    round2((1.0 - avg_diff) * 100.0)
}

/// Skill coverage 0–100: share of required skills the applicant has.
/// No requirements means a perfect match.
pub fn skills_match(has: &[String], required: &[String]) -> f64 {
    if required.is_empty() {
        return 100.0;
    }
    let matched = required.iter().filter(|r| has.contains(r)).count();
    round2(matched as f64 / required.len() as f64 * 100.0)
}

/// Experience score 0–100 in three bands:
/// 0–2 years → 50–70, 3–5 years → 70–90, 6+ years → 90–100.
pub fn experience_score(years: f64) -> f64 {
    if years <= 2.0 {
        50.0 + years * 10.0
    } else if years <= 5.0 {
        70.0 + (years - 2.0) * 6.67
    } else {
        (90.0 + (years - 5.0) * 2.0).min(100.0)
    }
}

/// Ranks all applicants for the requested job, highest total first, and flags
/// the top `top_percent` (cutoff never below one applicant).
pub fn rank(req: &RankRequest) -> Result<Vec<RankedApplicant>, AppError> {
    let ideal = ideal_profile(&req.job);

    let mut results = Vec::with_capacity(req.applicants.len());
    for applicant in &req.applicants {
        applicant.scores.validate()?;

        let personality = ideal
            .map(|p| personality_match(&applicant.scores, p))
            .unwrap_or(0.0);
        let skills = skills_match(&applicant.skills, &req.required_skills);
        let experience = experience_score(applicant.experience_years);

        results.push(RankedApplicant {
            name: applicant.name.clone(),
            personality_match: personality,
            skills_match: skills,
            experience_score: experience,
            total_score: personality * 0.4 + skills * 0.4 + experience * 0.2,
            in_top_percent: false,
        });
    }

    results.sort_by(|a, b| {
        b.total_score
            .partial_cmp(&a.total_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if !results.is_empty() {
        let threshold = req.top_percent.unwrap_or(10.0);
        let top_count =
            ((results.len() as f64 * threshold / 100.0) as usize).max(1);
        for r in results.iter_mut().take(top_count) {
            r.in_top_percent = true;
        }
    }

    Ok(results)
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
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
    fn test_perfect_profile_match_is_100() {
        let ideal = ideal_profile("DataScientist").unwrap();
        assert_eq!(personality_match(ideal, ideal), 100.0);
    }

    #[test]
    fn test_personality_match_decreases_with_distance() {
        let ideal = ideal_profile("DataAnalyst").unwrap();
        let close = scores(4.5, 4.5, 3.0, 4.0, 2.5);
        let far = scores(1.0, 1.0, 1.0, 1.0, 5.0);
        assert!(personality_match(&close, ideal) > personality_match(&far, ideal));
    }

    #[test]
    fn test_skills_match_no_requirements_is_perfect() {
        assert_eq!(skills_match(&[], &[]), 100.0);
    }

    #[test]
    fn test_skills_match_partial_coverage() {
        let has = vec!["Python".to_string(), "SQL".to_string()];
        let required = vec![
            "Python".to_string(),
            "SQL".to_string(),
            "Statistics".to_string(),
            "CommunicationSkill".to_string(),
        ];
        assert_eq!(skills_match(&has, &required), 50.0);
    }

    #[test]
    fn test_experience_bands() {
        assert_eq!(experience_score(0.0), 50.0);
        assert_eq!(experience_score(2.0), 70.0);
        assert!((experience_score(5.0) - 90.01).abs() < 0.001);
        assert_eq!(experience_score(6.0), 92.0);
        assert_eq!(experience_score(20.0), 100.0);
    }

    #[test]
    fn test_rank_sorts_descending_and_flags_top() {
        let req = RankRequest {
            job: "SoftwareEngineer".to_string(),
            required_skills: vec!["Rust".to_string()],
            applicants: vec![
                ApplicantProfile {
                    name: "Weak".to_string(),
                    scores: scores(1.0, 1.0, 1.0, 1.0, 5.0),
                    skills: vec![],
                    experience_years: 0.0,
                },
                ApplicantProfile {
                    name: "Strong".to_string(),
                    scores: scores(4.5, 4.5, 3.0, 3.5, 2.0),
                    skills: vec!["Rust".to_string()],
                    experience_years: 6.0,
                },
            ],
            top_percent: Some(50.0),
        };
        let ranked = rank(&req).unwrap();
        assert_eq!(ranked[0].name, "Strong");
        assert_eq!(ranked[0].personality_match, 100.0);
        assert_eq!(ranked[0].skills_match, 100.0);
        assert!(ranked[0].in_top_percent);
        assert!(!ranked[1].in_top_percent);
    }

    #[test]
    fn test_top_cutoff_never_below_one() {
        let req = RankRequest {
            job: "DataScientist".to_string(),
            required_skills: vec![],
            applicants: vec![ApplicantProfile {
                name: "Only".to_string(),
                scores: scores(3.0, 3.0, 3.0, 3.0, 3.0),
                skills: vec![],
                experience_years: 1.0,
            }],
            top_percent: Some(10.0),
        };
        let ranked = rank(&req).unwrap();
        assert!(ranked[0].in_top_percent);
    }

    #[test]
    fn test_unknown_job_zeroes_personality_component() {
        let req = RankRequest {
            job: "Astronaut".to_string(),
            required_skills: vec![],
            applicants: vec![ApplicantProfile {
                name: "A".to_string(),
                scores: scores(5.0, 4.5, 3.0, 3.5, 2.0),
                skills: vec![],
                experience_years: 3.0,
            }],
            top_percent: None,
        };
        let ranked = rank(&req).unwrap();
        assert_eq!(ranked[0].personality_match, 0.0);
    }

    #[test]
    fn test_invalid_applicant_scores_rejected() {
        let req = RankRequest {
            job: "DataScientist".to_string(),
            required_skills: vec![],
            applicants: vec![ApplicantProfile {
                name: "Bad".to_string(),
                scores: scores(6.0, 3.0, 3.0, 3.0, 3.0),
                skills: vec![],
                experience_years: 1.0,
            }],
            top_percent: None,
        };
        assert!(rank(&req).is_err());
    }
}
