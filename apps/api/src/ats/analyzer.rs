//! ATS compatibility heuristic.
//!
//! Four independent checks, each scored 0–100:
//! 1. format: flat 95, +3 when name and title are both present
//! 2. keywords: share of `TECH_KEYWORDS` found anywhere in the résumé text
//! 3. structure: weighted presence of the core sections
//! 4. contact: 25 per contact field present
//!
//! The overall score is the rounded mean of the four.

use serde::{Deserialize, Serialize};

use crate::models::resume::{filled, ResumeData};

const TECH_KEYWORDS: &[&str] = &[
    "javascript",
    "python",
    "java",
    "react",
    "angular",
    "vue",
    "node.js",
    "express",
    "mongodb",
    "postgresql",
    "mysql",
    "aws",
    "azure",
    "docker",
    "kubernetes",
    "microservices",
    "api",
    "rest",
    "graphql",
    "git",
    "jenkins",
    "ci/cd",
    "machine learning",
    "cloud architecture",
    "devops",
    "agile",
    "scrum",
];

const FORMAT_BASE_SCORE: u32 = 95;
const KEYWORD_WARNING_THRESHOLD: u32 = 85;
const STRUCTURE_SUCCESS_THRESHOLD: u32 = 95;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Warning,
    Success,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AtsSuggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AtsAnalysis {
    pub overall_score: u32,
    pub format_compatibility: u32,
    pub keyword_optimization: u32,
    pub section_structure: u32,
    pub contact_information: u32,
    pub suggestions: Vec<AtsSuggestion>,
}

pub fn analyze_resume(data: &ResumeData) -> AtsAnalysis {
    let format = format_score(data);
    let keywords = keyword_score(data);
    let structure = structure_score(data);
    let contact = contact_score(data);

    let overall_score = ((format + keywords + structure + contact) as f64 / 4.0).round() as u32;

    AtsAnalysis {
        overall_score,
        format_compatibility: format,
        keyword_optimization: keywords,
        section_structure: structure,
        contact_information: contact,
        suggestions: build_suggestions(data, keywords, structure),
    }
}

fn format_score(data: &ResumeData) -> u32 {
    let info = &data.personal_info;
    let mut score = FORMAT_BASE_SCORE;
    if !info.full_name.is_empty() && !info.professional_title.is_empty() {
        score += 3;
    }
    score.min(100)
}

fn keyword_score(data: &ResumeData) -> u32 {
    let text = searchable_text(data).to_lowercase();
    let found = TECH_KEYWORDS
        .iter()
        .filter(|kw| text.contains(**kw))
        .count();
    ((found as f64 / TECH_KEYWORDS.len() as f64) * 100.0).round() as u32
}

fn structure_score(data: &ResumeData) -> u32 {
    let mut score = 0;
    if !data.personal_info.full_name.is_empty() {
        score += 20;
    }
    if !data.work_experience.is_empty() {
        score += 30;
    }
    if !data.education.is_empty() {
        score += 20;
    }
    if !data.skills.technical_skills.is_empty() {
        score += 30;
    }
    score.min(100)
}

fn contact_score(data: &ResumeData) -> u32 {
    let info = &data.personal_info;
    [
        !info.full_name.is_empty(),
        !info.email.is_empty(),
        !info.phone.is_empty(),
        filled(&info.location).is_some(),
    ]
    .iter()
    .filter(|present| **present)
    .count() as u32
        * 25
}

/// Concatenates every free-text field the keyword check looks at.
fn searchable_text(data: &ResumeData) -> String {
    let opt = |v: &Option<String>| v.clone().unwrap_or_default();

    let mut parts = vec![
        opt(&data.personal_info.professional_summary),
        data.skills.technical_skills.clone(),
        opt(&data.skills.frameworks),
        opt(&data.skills.tools),
    ];
    parts.extend(data.work_experience.iter().map(|e| e.achievements.clone()));
    parts.extend(data.education.iter().map(|e| e.degree.clone()));
    parts.extend(data.projects.iter().map(|p| {
        format!(
            "{} {} {} {}",
            p.project_name,
            p.description,
            p.technologies_used,
            opt(&p.key_features)
        )
    }));
    parts.extend(
        data.achievements
            .iter()
            .map(|a| format!("{} {}", a.title, a.description)),
    );
    parts.extend(
        data.certifications
            .iter()
            .map(|c| format!("{} {}", c.name, c.issuer)),
    );

    parts.join(" ")
}

fn build_suggestions(data: &ResumeData, keywords: u32, structure: u32) -> Vec<AtsSuggestion> {
    let mut suggestions = Vec::new();

    if keywords < KEYWORD_WARNING_THRESHOLD {
        suggestions.push(AtsSuggestion {
            kind: SuggestionKind::Warning,
            title: "Add more tech keywords".to_string(),
            description: "Include \"machine learning\", \"cloud architecture\", \"microservices\" for better matching".to_string(),
        });
    }

    if structure >= STRUCTURE_SUCCESS_THRESHOLD {
        suggestions.push(AtsSuggestion {
            kind: SuggestionKind::Success,
            title: "Great format structure".to_string(),
            description: "Your resume uses ATS-friendly formatting with clear sections".to_string(),
        });
    }

    if filled(&data.personal_info.linkedin_url).is_none() {
        suggestions.push(AtsSuggestion {
            kind: SuggestionKind::Info,
            title: "Consider adding LinkedIn profile".to_string(),
            description: "LinkedIn profiles help ATS systems verify your professional background"
                .to_string(),
        });
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::fixtures::sample_resume;
    use crate::models::resume::Project;

    #[test]
    fn test_sample_breakdown() {
        let analysis = analyze_resume(&sample_resume());
        assert_eq!(analysis.format_compatibility, 98);
        // python, java, postgresql, aws, docker, api, rest, git, jenkins → 9/27
        assert_eq!(analysis.keyword_optimization, 33);
        assert_eq!(analysis.section_structure, 100);
        assert_eq!(analysis.contact_information, 100);
        // (98 + 33 + 100 + 100) / 4 = 82.75
        assert_eq!(analysis.overall_score, 83);
    }

    #[test]
    fn test_sample_suggestions_in_order() {
        let analysis = analyze_resume(&sample_resume());
        let kinds: Vec<_> = analysis.suggestions.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SuggestionKind::Warning, SuggestionKind::Success]);
    }

    #[test]
    fn test_empty_resume_scores() {
        let analysis = analyze_resume(&ResumeData::default());
        assert_eq!(analysis.format_compatibility, 95);
        assert_eq!(analysis.keyword_optimization, 0);
        assert_eq!(analysis.section_structure, 0);
        assert_eq!(analysis.contact_information, 0);
        // (95 + 0 + 0 + 0) / 4 = 23.75
        assert_eq!(analysis.overall_score, 24);
        assert_eq!(analysis.suggestions.len(), 2);
        assert_eq!(analysis.suggestions[1].kind, SuggestionKind::Info);
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let mut data = ResumeData::default();
        data.skills.technical_skills = "KUBERNETES GraphQL".to_string();
        // 2/27 = 7.4%
        assert_eq!(keyword_score(&data), 7);
    }

    #[test]
    fn test_keywords_found_in_projects() {
        let mut data = ResumeData::default();
        data.projects.push(Project {
            project_name: "Scheduler".to_string(),
            description: "Agile planning tool".to_string(),
            technologies_used: "Vue".to_string(),
            key_features: Some("Scrum boards".to_string()),
            ..Default::default()
        });
        // agile, vue, scrum
        assert_eq!(keyword_score(&data), 11);
    }

    #[test]
    fn test_all_keywords_scores_100_and_drops_warning() {
        let mut data = sample_resume();
        data.skills.technical_skills = TECH_KEYWORDS.join(", ");
        let analysis = analyze_resume(&data);
        assert_eq!(analysis.keyword_optimization, 100);
        assert!(analysis
            .suggestions
            .iter()
            .all(|s| s.kind != SuggestionKind::Warning));
    }

    #[test]
    fn test_structure_partial() {
        let mut data = sample_resume();
        data.education.clear();
        // 20 + 30 + 30
        assert_eq!(structure_score(&data), 80);
        let analysis = analyze_resume(&data);
        assert!(analysis
            .suggestions
            .iter()
            .all(|s| s.kind != SuggestionKind::Success));
    }

    #[test]
    fn test_empty_location_not_counted() {
        let mut data = sample_resume();
        data.personal_info.location = Some(String::new());
        assert_eq!(contact_score(&data), 75);
    }

    #[test]
    fn test_missing_linkedin_adds_info() {
        let mut data = sample_resume();
        data.personal_info.linkedin_url = Some(String::new());
        let analysis = analyze_resume(&data);
        let last = analysis.suggestions.last().unwrap();
        assert_eq!(last.kind, SuggestionKind::Info);
        assert_eq!(last.title, "Consider adding LinkedIn profile");
    }

    #[test]
    fn test_serializes_camel_case_with_type_tag() {
        let value = serde_json::to_value(analyze_resume(&sample_resume())).unwrap();
        assert_eq!(value["overallScore"], 83);
        assert_eq!(value["suggestions"][0]["type"], "warning");
    }
}
