//! Canned "AI" writing suggestions.
//!
//! Nothing here calls a model: every suggestion is a fixed template appended
//! to the user's own text, chosen by simple presence checks.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::resume::{filled, ResumeData};

const SUMMARY_MIN_CHARS: usize = 100;

const SUMMARY_EXTENSION: &str = "Experienced in developing scalable applications with modern frameworks, leading cross-functional teams, and implementing best practices for code quality and system architecture.";

const METRIC_BULLETS: &str = "\n• Improved system performance by 40% through code optimization\n• Led team of 5 engineers resulting in 25% faster delivery times\n• Reduced deployment errors by 60% through automated testing implementation";

const AI_KEYWORDS: &str =
    "Machine Learning, AI/ML, TensorFlow, PyTorch, Data Science, Natural Language Processing";

const CLOUD_KEYWORDS: &str =
    "AWS, Azure, Google Cloud Platform, Docker, Kubernetes, CI/CD, DevOps";

const CUSTOM_BULLETS: &str = "\
• Developed and deployed scalable web applications using modern technologies
• Implemented responsive design principles ensuring cross-browser compatibility
• Collaborated with product managers and designers to deliver user-centric solutions
• Optimized application performance resulting in 50% faster load times
• Maintained code quality through unit testing and code reviews";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionCategory {
    Content,
    Keyword,
    Achievement,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    High,
    Medium,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiSuggestion {
    #[serde(rename = "type")]
    pub category: SuggestionCategory,
    /// Field path the suggestion applies to, e.g. `workExperience[0].achievements`.
    pub field: String,
    pub original: String,
    pub suggested: String,
    pub reason: String,
    pub impact: Impact,
}

/// Scans the résumé and proposes template-based rewrites.
pub fn suggest_improvements(data: &ResumeData) -> Vec<AiSuggestion> {
    let mut suggestions = Vec::new();

    if let Some(summary) = filled(&data.personal_info.professional_summary) {
        if summary.chars().count() < SUMMARY_MIN_CHARS {
            suggestions.push(AiSuggestion {
                category: SuggestionCategory::Content,
                field: "professionalSummary".to_string(),
                original: summary.to_string(),
                suggested: format!("{summary} {SUMMARY_EXTENSION}"),
                reason: "Professional summary too brief - expand with specific skills and achievements".to_string(),
                impact: Impact::High,
            });
        }
    }

    for (index, exp) in data.work_experience.iter().enumerate() {
        let achievements = &exp.achievements;
        if !achievements.is_empty() && !achievements.contains('%') && !achievements.contains('$') {
            suggestions.push(AiSuggestion {
                category: SuggestionCategory::Achievement,
                field: format!("workExperience[{index}].achievements"),
                original: achievements.clone(),
                suggested: format!("{achievements}{METRIC_BULLETS}"),
                reason: "Add quantifiable metrics to demonstrate impact".to_string(),
                impact: Impact::High,
            });
        }
    }

    let technical = &data.skills.technical_skills;
    if !technical.is_empty() {
        let lower = technical.to_lowercase();

        if !["ai", "machine learning", "tensorflow"]
            .iter()
            .any(|kw| lower.contains(*kw))
        {
            suggestions.push(AiSuggestion {
                category: SuggestionCategory::Keyword,
                field: "technicalSkills".to_string(),
                original: technical.clone(),
                suggested: format!("{technical}, {AI_KEYWORDS}"),
                reason: "Add trending AI/ML keywords for better ATS matching".to_string(),
                impact: Impact::Medium,
            });
        }

        if !["aws", "azure", "gcp"].iter().any(|kw| lower.contains(*kw)) {
            suggestions.push(AiSuggestion {
                category: SuggestionCategory::Keyword,
                field: "technicalSkills".to_string(),
                original: technical.clone(),
                suggested: format!("{technical}, {CLOUD_KEYWORDS}"),
                reason: "Add cloud technologies for modern tech stack appeal".to_string(),
                impact: Impact::High,
            });
        }
    }

    suggestions
}

/// Produces boilerplate content for a free-form request.
pub fn generate_custom(prompt: &str) -> Result<AiSuggestion, AppError> {
    if prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    Ok(AiSuggestion {
        category: SuggestionCategory::Content,
        field: "custom".to_string(),
        original: prompt.to_string(),
        suggested: format!(
            "Based on your request: \"{prompt}\", here's an optimized suggestion:\n\n{CUSTOM_BULLETS}"
        ),
        reason: "AI-generated content based on your custom prompt".to_string(),
        impact: Impact::Medium,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Applying a suggestion back onto the résumé
// ────────────────────────────────────────────────────────────────────────────

/// Résumé fields a suggestion can be written into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionTarget {
    ProfessionalSummary,
    TechnicalSkills,
    WorkAchievements(usize),
}

impl FromStr for SuggestionTarget {
    type Err = AppError;

    fn from_str(field: &str) -> Result<Self, Self::Err> {
        match field {
            "professionalSummary" => return Ok(SuggestionTarget::ProfessionalSummary),
            "technicalSkills" => return Ok(SuggestionTarget::TechnicalSkills),
            _ => {}
        }

        field
            .strip_prefix("workExperience[")
            .and_then(|rest| rest.strip_suffix("].achievements"))
            .and_then(|index| index.parse::<usize>().ok())
            .map(SuggestionTarget::WorkAchievements)
            .ok_or_else(|| AppError::Validation(format!("Unknown suggestion field '{field}'")))
    }
}

impl SuggestionTarget {
    pub fn apply(self, data: &mut ResumeData, value: String) -> Result<(), AppError> {
        match self {
            SuggestionTarget::ProfessionalSummary => {
                data.personal_info.professional_summary = Some(value);
            }
            SuggestionTarget::TechnicalSkills => {
                data.skills.technical_skills = value;
            }
            SuggestionTarget::WorkAchievements(index) => {
                let exp = data.work_experience.get_mut(index).ok_or_else(|| {
                    AppError::Validation(format!("No work experience at index {index}"))
                })?;
                exp.achievements = value;
            }
        }
        Ok(())
    }
}
