//! Recommendation assembly — classify a score vector, then attach each
//! matched category's job list from the catalog.

use serde::Serialize;

use crate::classification::catalog::{display_name, jobs_for};
use crate::classification::rules::{classify, FitCategory};
use crate::classification::scores::ScoreVector;
use crate::errors::AppError;

/// One matched category plus its recommended jobs, in catalog order.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRecommendation {
    pub category: FitCategory,
    pub name: &'static str,
    pub jobs: &'static [&'static str],
}

/// Runs the classifier and assembles recommendations for every matched
/// category. An empty match set yields an empty list; "no suitable category"
/// is a valid outcome, not an error.
pub fn recommend(scores: &ScoreVector) -> Result<Vec<CategoryRecommendation>, AppError> {
    let matched = classify(scores)?;
    Ok(matched
        .into_iter()
        .map(|category| CategoryRecommendation {
            category,
            name: display_name(category),
            jobs: jobs_for(category),
        })
        .collect())
}

/// Flattens all matched categories' job lists in table order, deduplicates
/// preserving first occurrence, and truncates to `n`.
pub fn top_n(scores: &ScoreVector, n: usize) -> Result<Vec<&'static str>, AppError> {
    let matched = classify(scores)?;
    let mut seen = Vec::new();
    for category in matched {
        for &job in jobs_for(category) {
            if !seen.contains(&job) {
                seen.push(job);
            }
        }
    }
    seen.truncate(n);
    Ok(seen)
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
    fn test_recommendation_keys_equal_classification() {
        let s = scores(4.5, 4.2, 3.0, 3.8, 2.0);
        let matched = classify(&s).unwrap();
        let recs = recommend(&s).unwrap();
        let keys: Vec<FitCategory> = recs.iter().map(|r| r.category).collect();
        assert_eq!(keys, matched);
    }

    #[test]
    fn test_recommendation_carries_exact_job_lists() {
        let recs = recommend(&scores(4.5, 4.2, 3.0, 3.8, 2.0)).unwrap();
        let analytical = recs
            .iter()
            .find(|r| r.category == FitCategory::AnalyticalCreative)
            .unwrap();
        assert_eq!(
            analytical.jobs,
            &[
                "Data Scientist",
                "Data Analyst",
                "UI/UX Designer",
                "UX Researcher",
                "Product Manager",
                "Content Strategist",
            ]
        );
    }

    #[test]
    fn test_no_match_yields_empty_mapping() {
        let recs = recommend(&scores(1.0, 1.0, 1.0, 1.0, 4.0)).unwrap();
        assert!(recs.is_empty());
    }

    #[test]
    fn test_invalid_scores_propagate_validation_error() {
        assert!(recommend(&scores(4.0, 4.0, 3.0, 3.5, 5.5)).is_err());
    }

    #[test]
    fn test_top_n_flattens_in_table_order_and_truncates() {
        // Matches AnalyticalCreative, TechnicalStructured, and ContentWriting.
        let top = top_n(&scores(4.5, 4.2, 3.0, 3.8, 2.0), 8).unwrap();
        assert_eq!(
            top,
            vec![
                "Data Scientist",
                "Data Analyst",
                "UI/UX Designer",
                "UX Researcher",
                "Product Manager",
                "Content Strategist",
                "Software Engineer",
                "DevOps Engineer",
            ]
        );
    }

    #[test]
    fn test_top_n_on_no_match_is_empty() {
        assert!(top_n(&scores(1.0, 1.0, 1.0, 1.0, 4.0), 5)
            .unwrap()
            .is_empty());
    }
}
