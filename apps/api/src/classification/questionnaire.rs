//! Questionnaire scoring — derives the five trait scores from the 30-question
//! Likert personality test (answers 1–5, six questions per trait).

use crate::classification::scores::{PersonalityTrait, ScoreVector};
use crate::errors::AppError;

pub const QUESTION_COUNT: usize = 30;
pub const ANSWER_MIN: u8 = 1;
pub const ANSWER_MAX: u8 = 5;

/// Question-to-trait mapping. Questions are 1-based:
/// Q1–Q6 agreeableness, Q7–Q12 conscientiousness, Q13–Q18 extraversion,
/// Q19–Q24 neuroticism, Q25–Q30 openness.
fn trait_for_question(q: usize) -> PersonalityTrait {
    match q {
        1..=6 => PersonalityTrait::Agreeableness,
        7..=12 => PersonalityTrait::Conscientiousness,
        13..=18 => PersonalityTrait::Extraversion,
        19..=24 => PersonalityTrait::Neuroticism,
        _ => PersonalityTrait::Openness,
    }
}

/// Averages each trait's six answers and rounds to two decimal places.
/// `answers[0]` is Q1. Fails if the slice is not exactly 30 answers long or
/// any answer falls outside 1–5; the error names the offending question.
pub fn score_questionnaire(answers: &[u8]) -> Result<ScoreVector, AppError> {
    if answers.len() != QUESTION_COUNT {
        return Err(AppError::Validation(format!(
            "expected {QUESTION_COUNT} questionnaire answers, got {}",
            answers.len()
        )));
    }

    for (i, &a) in answers.iter().enumerate() {
        if !(ANSWER_MIN..=ANSWER_MAX).contains(&a) {
            return Err(AppError::Validation(format!(
                "answer to Q{} is {a}, must be between {ANSWER_MIN} and {ANSWER_MAX}",
                i + 1
            )));
        }
    }

    let trait_avg = |t: PersonalityTrait| {
        let (sum, count) = answers
            .iter()
            .enumerate()
            .filter(|(i, _)| trait_for_question(i + 1) == t)
            .fold((0u32, 0u32), |(s, c), (_, &a)| (s + a as u32, c + 1));
        round2(sum as f64 / count as f64)
    };

    Ok(ScoreVector {
        openness: trait_avg(PersonalityTrait::Openness),
        conscientiousness: trait_avg(PersonalityTrait::Conscientiousness),
        extraversion: trait_avg(PersonalityTrait::Extraversion),
        agreeableness: trait_avg(PersonalityTrait::Agreeableness),
        neuroticism: trait_avg(PersonalityTrait::Neuroticism),
    })
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_answers_give_uniform_scores() {
        let scores = score_questionnaire(&[3; 30]).unwrap();
        assert_eq!(scores.openness, 3.0);
        assert_eq!(scores.conscientiousness, 3.0);
        assert_eq!(scores.extraversion, 3.0);
        assert_eq!(scores.agreeableness, 3.0);
        assert_eq!(scores.neuroticism, 3.0);
    }

    #[test]
    fn test_question_blocks_map_to_the_right_traits() {
        // Q1–Q6 all 5s, Q25–Q30 all 4s, everything else 1.
        let mut answers = [1u8; 30];
        answers[..6].fill(5);
        answers[24..].fill(4);
        let scores = score_questionnaire(&answers).unwrap();
        assert_eq!(scores.agreeableness, 5.0);
        assert_eq!(scores.openness, 4.0);
        assert_eq!(scores.conscientiousness, 1.0);
        assert_eq!(scores.extraversion, 1.0);
        assert_eq!(scores.neuroticism, 1.0);
    }

    #[test]
    fn test_averages_round_to_two_decimals() {
        // Openness block: 5,4,4,4,4,4 → 25/6 = 4.1666… → 4.17
        let mut answers = [4u8; 30];
        answers[24] = 5;
        let scores = score_questionnaire(&answers).unwrap();
        assert_eq!(scores.openness, 4.17);
    }

    #[test]
    fn test_wrong_answer_count_rejected() {
        assert!(score_questionnaire(&[3; 29]).is_err());
        assert!(score_questionnaire(&[3; 31]).is_err());
    }

    #[test]
    fn test_out_of_range_answer_names_the_question() {
        let mut answers = [3u8; 30];
        answers[18] = 0; // Q19
        let err = score_questionnaire(&answers).unwrap_err();
        assert!(err.to_string().contains("Q19"), "got: {err}");

        answers[18] = 6;
        assert!(score_questionnaire(&answers).is_err());
    }

    #[test]
    fn test_scores_are_always_in_domain() {
        let scores = score_questionnaire(&[5; 30]).unwrap();
        assert!(scores.validate().is_ok());
    }
}
