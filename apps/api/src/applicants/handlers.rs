//! Axum route handlers for the applicant store.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::applicants::store::{get_applicant, insert_applicant, list_applicants};
use crate::classification::questionnaire::score_questionnaire;
use crate::classification::recommend::{recommend, CategoryRecommendation};
use crate::classification::rules::FitCategory;
use crate::classification::scores::ScoreVector;
use crate::errors::AppError;
use crate::models::applicant::ApplicantRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateApplicantRequest {
    pub full_name: String,
    pub applied_for: Option<String>,
    /// Explicit trait scores, or…
    pub scores: Option<ScoreVector>,
    /// …raw questionnaire answers (Q1–Q30), scored server-side.
    pub answers: Option<Vec<u8>>,
}

#[derive(Debug, Serialize)]
pub struct ApplicantRecommendationsResponse {
    pub applicant: ApplicantRow,
    pub categories: Vec<FitCategory>,
    pub recommendations: Vec<CategoryRecommendation>,
}

/// POST /api/v1/applicants
pub async fn handle_create_applicant(
    State(state): State<AppState>,
    Json(req): Json<CreateApplicantRequest>,
) -> Result<(StatusCode, Json<ApplicantRow>), AppError> {
    if req.full_name.trim().is_empty() {
        return Err(AppError::Validation("full_name must not be empty".to_string()));
    }

    let (scores, raw_answers) = match (req.scores, req.answers) {
        (Some(_), Some(_)) => {
            return Err(AppError::Validation(
                "provide either scores or answers, not both".to_string(),
            ))
        }
        (Some(scores), None) => {
            scores.validate()?;
            (scores, None)
        }
        (None, Some(answers)) => {
            let scores = score_questionnaire(&answers)?;
            (scores, Some(serde_json::to_value(answers).map_err(anyhow::Error::from)?))
        }
        (None, None) => {
            return Err(AppError::Validation(
                "either scores or answers is required".to_string(),
            ))
        }
    };

    let row = insert_applicant(
        &state.db,
        req.full_name.trim(),
        req.applied_for.as_deref(),
        &scores,
        raw_answers.as_ref(),
    )
    .await?;

    tracing::info!("Registered applicant {} ({})", row.full_name, row.id);
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/applicants
pub async fn handle_list_applicants(
    State(state): State<AppState>,
) -> Result<Json<Vec<ApplicantRow>>, AppError> {
    Ok(Json(list_applicants(&state.db).await?))
}

/// GET /api/v1/applicants/:id
pub async fn handle_get_applicant(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApplicantRow>, AppError> {
    Ok(Json(get_applicant(&state.db, id).await?))
}

/// GET /api/v1/applicants/:id/recommendations
pub async fn handle_applicant_recommendations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApplicantRecommendationsResponse>, AppError> {
    let applicant = get_applicant(&state.db, id).await?;
    let scores = applicant.scores();
    let categories = state.classifier.classify(&scores).await?;
    let recommendations = recommend(&scores)?;

    Ok(Json(ApplicantRecommendationsResponse {
        applicant,
        categories,
        recommendations,
    }))
}
