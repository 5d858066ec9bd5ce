use axum::{extract::rejection::JsonRejection, Json};

use crate::ats::analyzer::{analyze_resume, AtsAnalysis};
use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::validation::validated;

/// POST /api/analyze-ats
pub async fn handle_analyze(
    payload: Result<Json<ResumeData>, JsonRejection>,
) -> Result<Json<AtsAnalysis>, AppError> {
    let data = validated(payload, "Invalid resume data for analysis")?;
    Ok(Json(analyze_resume(&data)))
}
