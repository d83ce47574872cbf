//! Fit classifier seam — trait-based so the threshold evaluator can be
//! swapped for an external reasoner backend without touching handlers.
//!
//! `AppState` holds an `Arc<dyn FitClassifier>`, fixed at startup.

use async_trait::async_trait;

use crate::classification::rules::{classify, FitCategory};
use crate::classification::scores::ScoreVector;
use crate::errors::AppError;

#[async_trait]
pub trait FitClassifier: Send + Sync {
    async fn classify(&self, scores: &ScoreVector) -> Result<Vec<FitCategory>, AppError>;
}

/// Default backend: direct evaluation of the fixed rule table. Pure,
/// deterministic, no external calls.
pub struct ThresholdClassifier;

#[async_trait]
impl FitClassifier for ThresholdClassifier {
    async fn classify(&self, scores: &ScoreVector) -> Result<Vec<FitCategory>, AppError> {
        classify(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_threshold_backend_matches_rule_table() {
        let s = ScoreVector {
            openness: 4.5,
            conscientiousness: 4.2,
            extraversion: 3.0,
            agreeableness: 3.8,
            neuroticism: 2.0,
        };
        let via_trait = ThresholdClassifier.classify(&s).await.unwrap();
        assert_eq!(via_trait, classify(&s).unwrap());
    }
}
