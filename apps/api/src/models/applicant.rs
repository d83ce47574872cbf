use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::classification::scores::ScoreVector;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicantRow {
    pub id: Uuid,
    pub full_name: String,
    /// Position the applicant applied for, if any.
    pub applied_for: Option<String>,
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
    /// Raw 30-question answers when scores came from the questionnaire.
    pub answers: Option<Value>,
    pub created_at: DateTime<Utc>,
}

impl ApplicantRow {
    pub fn scores(&self) -> ScoreVector {
        ScoreVector {
            openness: self.openness,
            conscientiousness: self.conscientiousness,
            extraversion: self.extraversion,
            agreeableness: self.agreeableness,
            neuroticism: self.neuroticism,
        }
    }
}
