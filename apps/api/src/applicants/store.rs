//! Applicant persistence over Postgres.

use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::classification::scores::ScoreVector;
use crate::errors::AppError;
use crate::models::applicant::ApplicantRow;

pub async fn insert_applicant(
    pool: &PgPool,
    full_name: &str,
    applied_for: Option<&str>,
    scores: &ScoreVector,
    answers: Option<&Value>,
) -> Result<ApplicantRow, AppError> {
    let row: ApplicantRow = sqlx::query_as(
        r#"
        INSERT INTO applicants
            (full_name, applied_for, openness, conscientiousness,
             extraversion, agreeableness, neuroticism, answers)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(full_name)
    .bind(applied_for)
    .bind(scores.openness)
    .bind(scores.conscientiousness)
    .bind(scores.extraversion)
    .bind(scores.agreeableness)
    .bind(scores.neuroticism)
    .bind(answers)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn list_applicants(pool: &PgPool) -> Result<Vec<ApplicantRow>, AppError> {
    let rows: Vec<ApplicantRow> =
        sqlx::query_as("SELECT * FROM applicants ORDER BY created_at DESC")
            .fetch_all(pool)
            .await?;
    Ok(rows)
}

pub async fn get_applicant(pool: &PgPool, id: Uuid) -> Result<ApplicantRow, AppError> {
    let row: Option<ApplicantRow> = sqlx::query_as("SELECT * FROM applicants WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    row.ok_or_else(|| AppError::NotFound(format!("Applicant {id} not found")))
}
