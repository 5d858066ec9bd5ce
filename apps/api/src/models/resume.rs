use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateUrl, ValidationError};

// ────────────────────────────────────────────────────────────────────────────
// Résumé sections (wire format: camelCase, as sent by the builder UI)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_personal_info"))]
pub struct PersonalInfo {
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    #[validate(length(min = 1, message = "Professional title is required"))]
    pub professional_title: String,
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone: String,
    pub linkedin_url: Option<String>,
    pub location: Option<String>,
    pub professional_summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    #[validate(length(min = 1, message = "Job title is required"))]
    pub job_title: String,
    #[validate(length(min = 1, message = "Company name is required"))]
    pub company_name: String,
    #[validate(length(min = 1, message = "Start date is required"))]
    pub start_date: String,
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_current_role: bool,
    #[validate(length(min = 1, message = "Achievements are required"))]
    pub achievements: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    #[validate(length(min = 1, message = "Degree is required"))]
    pub degree: String,
    #[validate(length(min = 1, message = "Institution is required"))]
    pub institution: String,
    pub graduation_year: Option<String>,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    #[validate(length(min = 1, message = "Technical skills are required"))]
    pub technical_skills: String,
    pub frameworks: Option<String>,
    pub tools: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_project_urls"))]
pub struct Project {
    #[validate(length(min = 1, message = "Project name is required"))]
    pub project_name: String,
    #[validate(length(min = 1, message = "Project description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "Technologies used are required"))]
    pub technologies_used: String,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub key_features: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    #[validate(length(min = 1, message = "Achievement title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Achievement description is required"))]
    pub description: String,
    pub date: Option<String>,
    pub issuer: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_certification_urls"))]
pub struct Certification {
    #[validate(length(min = 1, message = "Certification name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Certification issuer is required"))]
    pub issuer: String,
    pub issue_date: Option<String>,
    pub expiry_date: Option<String>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
}

/// The full résumé aggregate submitted by the builder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    #[validate(nested)]
    pub personal_info: PersonalInfo,
    #[validate(nested)]
    pub work_experience: Vec<WorkExperience>,
    #[validate(nested)]
    pub education: Vec<Education>,
    #[validate(nested)]
    pub skills: Skills,
    #[serde(default)]
    #[validate(nested)]
    pub projects: Vec<Project>,
    #[serde(default)]
    #[validate(nested)]
    pub achievements: Vec<Achievement>,
    #[serde(default)]
    #[validate(nested)]
    pub certifications: Vec<Certification>,
}

/// A stored résumé: the submitted data plus server-assigned metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resume {
    pub id: u64,
    #[serde(flatten)]
    pub data: ResumeData,
    pub ats_score: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Returns the value of an optional text field only when it holds something.
pub fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// ────────────────────────────────────────────────────────────────────────────
// Optional URL checks (empty string counts as "not provided")
// ────────────────────────────────────────────────────────────────────────────

fn check_optional_url(value: &Option<String>, code: &'static str) -> Result<(), ValidationError> {
    match filled(value) {
        Some(url) if !url.validate_url() => Err(ValidationError::new(code)),
        _ => Ok(()),
    }
}

/// `validator`'s email rule accepts bare hosts like `a@localhost`; résumé
/// contacts need a dotted domain with an alphabetic TLD of two or more letters.
fn has_dotted_domain(email: &str) -> bool {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };
    match domain.rsplit_once('.') {
        Some((host, tld)) => {
            !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}

fn validate_personal_info(info: &PersonalInfo) -> Result<(), ValidationError> {
    if !has_dotted_domain(&info.email) {
        return Err(ValidationError::new("email_domain"));
    }
    check_optional_url(&info.linkedin_url, "linkedin_url")
}

fn validate_project_urls(project: &Project) -> Result<(), ValidationError> {
    check_optional_url(&project.project_url, "project_url")?;
    check_optional_url(&project.github_url, "github_url")
}

fn validate_certification_urls(cert: &Certification) -> Result<(), ValidationError> {
    check_optional_url(&cert.credential_url, "credential_url")
}

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// A complete, valid résumé used across module tests.
    pub fn sample_resume() -> ResumeData {
        ResumeData {
            personal_info: PersonalInfo {
                full_name: "Ada Lovelace".to_string(),
                professional_title: "Senior Software Engineer".to_string(),
                email: "ada@example.com".to_string(),
                phone: "+44 20 7946 0000".to_string(),
                linkedin_url: Some("https://www.linkedin.com/in/ada".to_string()),
                location: Some("London, UK".to_string()),
                professional_summary: Some(
                    "Backend engineer building reliable services in Python and Java.".to_string(),
                ),
            },
            work_experience: vec![WorkExperience {
                job_title: "Software Engineer".to_string(),
                company_name: "Analytical Engines Ltd".to_string(),
                start_date: "2019-01".to_string(),
                end_date: None,
                is_current_role: true,
                achievements: "Built REST API services on AWS with Docker".to_string(),
            }],
            education: vec![Education {
                degree: "BSc Mathematics".to_string(),
                institution: "University of London".to_string(),
                graduation_year: Some("2018".to_string()),
                gpa: None,
            }],
            skills: Skills {
                technical_skills: "Python, Java, PostgreSQL".to_string(),
                frameworks: Some("Django, Spring".to_string()),
                tools: Some("Git, Jenkins".to_string()),
            },
            projects: vec![],
            achievements: vec![],
            certifications: vec![],
        }
    }
}
