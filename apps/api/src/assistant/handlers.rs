//! Axum route handlers for the writing assistant.

use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::assistant::suggestions::{
    generate_custom, suggest_improvements, AiSuggestion, SuggestionTarget,
};
use crate::errors::AppError;
use crate::models::resume::ResumeData;
use crate::state::AppState;
use crate::validation::validated;

#[derive(Debug, Deserialize, Validate)]
pub struct CustomContentRequest {
    #[validate(length(min = 1, message = "prompt cannot be empty"))]
    pub prompt: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApplySuggestionRequest {
    #[validate(nested)]
    pub resume_data: ResumeData,
    pub field: String,
    pub value: String,
}

async fn simulated_latency(state: &AppState) {
    let delay = state.config.assistant_delay_ms;
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }
}

/// POST /api/assistant/suggestions
pub async fn handle_suggestions(
    State(state): State<AppState>,
    payload: Result<Json<ResumeData>, JsonRejection>,
) -> Result<Json<Vec<AiSuggestion>>, AppError> {
    let data = validated(payload, "Invalid resume data")?;
    simulated_latency(&state).await;

    let suggestions = suggest_improvements(&data);
    tracing::debug!("Assistant found {} suggestions", suggestions.len());
    Ok(Json(suggestions))
}

/// POST /api/assistant/generate
pub async fn handle_generate_content(
    State(state): State<AppState>,
    payload: Result<Json<CustomContentRequest>, JsonRejection>,
) -> Result<Json<AiSuggestion>, AppError> {
    let request = validated(payload, "prompt cannot be empty")?;
    simulated_latency(&state).await;

    Ok(Json(generate_custom(&request.prompt)?))
}

/// POST /api/assistant/apply
///
/// Writes a suggestion's text into the named field and returns the updated résumé.
/// The result must still be a valid résumé, so a blank required field is a 400.
pub async fn handle_apply(
    payload: Result<Json<ApplySuggestionRequest>, JsonRejection>,
) -> Result<Json<ResumeData>, AppError> {
    let ApplySuggestionRequest {
        mut resume_data,
        field,
        value,
    } = validated(payload, "Invalid suggestion request")?;

    let target: SuggestionTarget = field.parse()?;
    target.apply(&mut resume_data, value)?;
    resume_data.validate().map_err(|errors| {
        tracing::debug!("Applied suggestion left the resume invalid: {errors}");
        AppError::Validation("Invalid suggestion request".to_string())
    })?;
    Ok(Json(resume_data))
}
