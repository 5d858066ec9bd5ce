use axum::{extract::rejection::JsonRejection, Json};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// Unwraps a JSON body and runs its `Validate` rules.
///
/// Malformed JSON, schema mismatches and rule violations all collapse into a
/// 400 carrying `message`; the detail is only logged.
pub fn validated<T>(payload: Result<Json<T>, JsonRejection>, message: &str) -> Result<T, AppError>
where
    T: DeserializeOwned + Validate,
{
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!("Rejected request body: {rejection}");
        AppError::Validation(message.to_string())
    })?;

    body.validate().map_err(|errors| {
        tracing::debug!("Request body failed validation: {errors}");
        AppError::Validation(message.to_string())
    })?;

    Ok(body)
}

/// Parses a numeric path id. Anything unparseable can never name a stored
/// résumé, so it is reported as not found.
pub fn parse_id(raw: &str, not_found: &str) -> Result<u64, AppError> {
    raw.parse::<u64>()
        .map_err(|_| AppError::NotFound(not_found.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::fixtures::sample_resume;
    use crate::models::resume::ResumeData;

    #[test]
    fn test_valid_body_passes_through() {
        let body = validated(Ok(Json(sample_resume())), "Invalid resume data").unwrap();
        assert_eq!(body, sample_resume());
    }

    #[test]
    fn test_rule_violation_uses_given_message() {
        let mut data = sample_resume();
        data.skills.technical_skills.clear();
        let err = validated::<ResumeData>(Ok(Json(data)), "Invalid resume data for analysis")
            .unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "Invalid resume data for analysis"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("12", "Resume not found").unwrap(), 12);
        assert!(matches!(
            parse_id("abc", "Resume not found"),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            parse_id("-1", "Resume not found"),
            Err(AppError::NotFound(_))
        ));
    }
}
