//! Axum route handlers for résumé CRUD.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::ats::analyzer::analyze_resume;
use crate::errors::AppError;
use crate::models::resume::{Resume, ResumeData};
use crate::state::AppState;
use crate::validation::{parse_id, validated};

const NOT_FOUND: &str = "Resume not found";
const INVALID: &str = "Invalid resume data";

/// GET /api/resumes
pub async fn handle_list(State(state): State<AppState>) -> Result<Json<Vec<Resume>>, AppError> {
    Ok(Json(state.store.list().await?))
}

/// GET /api/resumes/:id
pub async fn handle_get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Resume>, AppError> {
    let id = parse_id(&id, NOT_FOUND)?;
    state
        .store
        .get(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))
}

/// POST /api/resumes
pub async fn handle_create(
    State(state): State<AppState>,
    payload: Result<Json<ResumeData>, JsonRejection>,
) -> Result<(StatusCode, Json<Resume>), AppError> {
    let data = validated(payload, INVALID)?;
    let score = analyze_resume(&data).overall_score;

    let resume = state.store.create(data, score).await?;
    info!(resume_id = resume.id, ats_score = score, "Resume created");
    Ok((StatusCode::CREATED, Json(resume)))
}

/// PUT /api/resumes/:id
///
/// Replaces the whole résumé. The body is validated before the id is resolved,
/// so a bad body on an unknown id is still a 400.
pub async fn handle_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ResumeData>, JsonRejection>,
) -> Result<Json<Resume>, AppError> {
    let data = validated(payload, INVALID)?;
    let id = parse_id(&id, NOT_FOUND)?;
    let score = analyze_resume(&data).overall_score;

    let resume = state
        .store
        .update(id, data, score)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    info!(resume_id = id, ats_score = score, "Resume updated");
    Ok(Json(resume))
}

/// DELETE /api/resumes/:id
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id, NOT_FOUND)?;
    if !state.store.delete(id).await? {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }
    info!(resume_id = id, "Resume deleted");
    Ok(StatusCode::NO_CONTENT)
}
