//! Axum route handlers for the classification API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::classification::catalog::{all_categories, jobs_for, lookup, CategoryInfo};
use crate::classification::questionnaire::score_questionnaire;
use crate::classification::ranking::{rank, RankRequest, RankedApplicant};
use crate::classification::recommend::{recommend, top_n, CategoryRecommendation};
use crate::classification::rules::FitCategory;
use crate::classification::scores::ScoreVector;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub scores: ScoreVector,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub categories: Vec<FitCategory>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub scores: ScoreVector,
    /// When set, additionally returns a flattened, deduplicated top-N job list.
    pub top: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub matches: Vec<CategoryRecommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_jobs: Option<Vec<&'static str>>,
}

#[derive(Debug, Deserialize)]
pub struct QuestionnaireRequest {
    /// Answers to Q1–Q30 in order, each 1–5.
    pub answers: Vec<u8>,
}

#[derive(Debug, Serialize)]
pub struct QuestionnaireResponse {
    pub scores: ScoreVector,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryInfo>,
}

#[derive(Debug, Serialize)]
pub struct CategoryJobsResponse {
    pub category: FitCategory,
    pub jobs: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub job: String,
    pub results: Vec<RankedApplicant>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/classify
pub async fn handle_classify(
    State(state): State<AppState>,
    Json(req): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, AppError> {
    let categories = state.classifier.classify(&req.scores).await?;
    Ok(Json(ClassifyResponse { categories }))
}

/// POST /api/v1/recommend
pub async fn handle_recommend(
    Json(req): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    let matches = recommend(&req.scores)?;
    let top_jobs = match req.top {
        Some(n) => Some(top_n(&req.scores, n)?),
        None => None,
    };
    Ok(Json(RecommendResponse { matches, top_jobs }))
}

/// POST /api/v1/questionnaire/score
pub async fn handle_score_questionnaire(
    Json(req): Json<QuestionnaireRequest>,
) -> Result<Json<QuestionnaireResponse>, AppError> {
    let scores = score_questionnaire(&req.answers)?;
    Ok(Json(QuestionnaireResponse { scores }))
}

/// POST /api/v1/rank
pub async fn handle_rank(Json(req): Json<RankRequest>) -> Result<Json<RankResponse>, AppError> {
    let results = rank(&req)?;
    Ok(Json(RankResponse {
        job: req.job,
        results,
    }))
}

/// GET /api/v1/categories
pub async fn handle_list_categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: all_categories(),
    })
}

/// GET /api/v1/categories/:id/jobs
pub async fn handle_category_jobs(
    Path(id): Path<String>,
) -> Result<Json<CategoryJobsResponse>, AppError> {
    let category = lookup(&id)?;
    Ok(Json(CategoryJobsResponse {
        category,
        jobs: jobs_for(category),
    }))
}
