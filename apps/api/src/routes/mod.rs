pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::applicants::handlers as applicants;
use crate::classification::handlers as classification;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Classification API
        .route("/api/v1/classify", post(classification::handle_classify))
        .route("/api/v1/recommend", post(classification::handle_recommend))
        .route(
            "/api/v1/questionnaire/score",
            post(classification::handle_score_questionnaire),
        )
        .route("/api/v1/rank", post(classification::handle_rank))
        .route(
            "/api/v1/categories",
            get(classification::handle_list_categories),
        )
        .route(
            "/api/v1/categories/:id/jobs",
            get(classification::handle_category_jobs),
        )
        // Applicant store
        .route(
            "/api/v1/applicants",
            post(applicants::handle_create_applicant).get(applicants::handle_list_applicants),
        )
        .route("/api/v1/applicants/:id", get(applicants::handle_get_applicant))
        .route(
            "/api/v1/applicants/:id/recommendations",
            get(applicants::handle_applicant_recommendations),
        )
        .with_state(state)
}
