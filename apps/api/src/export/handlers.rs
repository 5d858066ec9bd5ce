use axum::{
    extract::{rejection::JsonRejection, Path},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};

use crate::errors::AppError;
use crate::export::generator::{export_resume, ExportFormat};
use crate::models::resume::ResumeData;
use crate::validation::validated;

/// POST /api/generate/:format
///
/// Renders the submitted résumé as a downloadable attachment.
/// The body is validated before the format is looked at.
pub async fn handle_generate(
    Path(format): Path<String>,
    payload: Result<Json<ResumeData>, JsonRejection>,
) -> Result<Response, AppError> {
    let data = validated(payload, "Failed to generate resume")?;
    let format: ExportFormat = format
        .parse()
        .map_err(|_| AppError::Validation("Invalid format".to_string()))?;

    let document = export_resume(&data, format);
    tracing::info!(
        export_format = format.extension(),
        bytes = document.body.len(),
        "Generated resume document"
    );

    let disposition = HeaderValue::from_str(&format!(
        "attachment; filename=\"{}\"",
        header_safe_filename(&document.filename)
    ))
    .map_err(|e| AppError::Internal(e.into()))?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(document.content_type)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.body,
    )
        .into_response())
}

/// Keeps printable ASCII that is legal inside a quoted header parameter.
fn header_safe_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '"' | '\\' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect()
}
