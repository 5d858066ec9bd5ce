//! Résumé document export.
//!
//! Only the plain-text format is actually rendered. PDF and DOCX return a
//! placeholder body under the right MIME type so the download flow can be
//! exercised end to end.

use std::str::FromStr;

use crate::models::resume::{filled, ResumeData};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Docx,
    Txt,
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownFormat;

impl FromStr for ExportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pdf" => Ok(ExportFormat::Pdf),
            "docx" => Ok(ExportFormat::Docx),
            "txt" => Ok(ExportFormat::Txt),
            _ => Err(UnknownFormat),
        }
    }
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
            ExportFormat::Txt => "txt",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ExportFormat::Txt => "text/plain; charset=utf-8",
        }
    }
}

/// A generated file ready to be sent as an attachment.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub filename: String,
    pub content_type: &'static str,
    pub body: String,
}

pub fn export_resume(data: &ResumeData, format: ExportFormat) -> ExportedDocument {
    let full_name = &data.personal_info.full_name;
    let body = match format {
        ExportFormat::Pdf => format!("PDF generated for {full_name}"),
        ExportFormat::Docx => format!("DOCX generated for {full_name}"),
        ExportFormat::Txt => render_txt(data),
    };

    ExportedDocument {
        filename: format!("{full_name}_resume.{}", format.extension()),
        content_type: format.content_type(),
        body,
    }
}

/// Renders the résumé as plain text, one section per heading.
/// Every section ends with a blank line.
pub fn render_txt(data: &ResumeData) -> String {
    let ResumeData {
        personal_info: info,
        work_experience,
        education,
        skills,
        projects,
        achievements,
        certifications,
    } = data;

    let mut lines: Vec<String> = Vec::new();

    lines.push(info.full_name.to_uppercase());
    lines.push(info.professional_title.clone());
    let mut contact = format!("{} • {}", info.email, info.phone);
    if let Some(location) = filled(&info.location) {
        contact.push_str(&format!(" • {location}"));
    }
    lines.push(contact);
    lines.push(String::new());

    if let Some(summary) = filled(&info.professional_summary) {
        lines.push("PROFESSIONAL SUMMARY".to_string());
        lines.push(summary.to_string());
        lines.push(String::new());
    }

    if !work_experience.is_empty() {
        lines.push("WORK EXPERIENCE".to_string());
        for exp in work_experience {
            lines.push(exp.job_title.clone());
            lines.push(exp.company_name.clone());
            lines.push(format!(
                "{} - {}",
                exp.start_date,
                filled(&exp.end_date).unwrap_or("Present")
            ));
            lines.push(exp.achievements.clone());
            lines.push(String::new());
        }
    }

    if !education.is_empty() {
        lines.push("EDUCATION".to_string());
        for edu in education {
            lines.push(edu.degree.clone());
            lines.push(match filled(&edu.graduation_year) {
                Some(year) => format!("{} • {year}", edu.institution),
                None => edu.institution.clone(),
            });
            lines.push(String::new());
        }
    }

    if !projects.is_empty() {
        lines.push("PROJECTS".to_string());
        for project in projects {
            lines.push(project.project_name.clone());
            lines.push(format!("Technologies: {}", project.technologies_used));
            let start = filled(&project.start_date);
            let end = filled(&project.end_date);
            if start.is_some() || end.is_some() {
                lines.push(format!(
                    "{} - {}",
                    start.unwrap_or(""),
                    end.unwrap_or("Present")
                ));
            }
            lines.push(project.description.clone());
            if let Some(features) = filled(&project.key_features) {
                lines.push(features.to_string());
            }
            lines.push(String::new());
        }
    }

    lines.push("TECHNICAL SKILLS".to_string());
    lines.push(skills.technical_skills.clone());
    if let Some(frameworks) = filled(&skills.frameworks) {
        lines.push(format!("Frameworks: {frameworks}"));
    }
    if let Some(tools) = filled(&skills.tools) {
        lines.push(format!("Tools: {tools}"));
    }
    lines.push(String::new());

    if !certifications.is_empty() {
        lines.push("CERTIFICATIONS".to_string());
        for cert in certifications {
            lines.push(cert.name.clone());
            lines.push(match filled(&cert.issue_date) {
                Some(issued) => format!("{} • {issued}", cert.issuer),
                None => cert.issuer.clone(),
            });
            if let Some(credential) = filled(&cert.credential_id) {
                lines.push(format!("Credential ID: {credential}"));
            }
            lines.push(String::new());
        }
    }

    if !achievements.is_empty() {
        lines.push("ACHIEVEMENTS & AWARDS".to_string());
        for achievement in achievements {
            lines.push(achievement.title.clone());
            let mut byline = filled(&achievement.issuer).unwrap_or("").to_string();
            if let Some(date) = filled(&achievement.date) {
                byline.push_str(&format!(" • {date}"));
            }
            lines.push(byline);
            lines.push(achievement.description.clone());
            lines.push(String::new());
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::fixtures::sample_resume;
    use crate::models::resume::{Achievement, Certification, Project};

    #[test]
    fn test_format_parsing() {
        assert_eq!("pdf".parse::<ExportFormat>(), Ok(ExportFormat::Pdf));
        assert_eq!("docx".parse::<ExportFormat>(), Ok(ExportFormat::Docx));
        assert_eq!("txt".parse::<ExportFormat>(), Ok(ExportFormat::Txt));
        assert_eq!("PDF".parse::<ExportFormat>(), Err(UnknownFormat));
        assert_eq!("rtf".parse::<ExportFormat>(), Err(UnknownFormat));
    }

    #[test]
    fn test_pdf_and_docx_are_placeholders() {
        let data = sample_resume();
        let pdf = export_resume(&data, ExportFormat::Pdf);
        assert_eq!(pdf.body, "PDF generated for Ada Lovelace");
        assert_eq!(pdf.filename, "Ada Lovelace_resume.pdf");
        assert_eq!(pdf.content_type, "application/pdf");

        let docx = export_resume(&data, ExportFormat::Docx);
        assert_eq!(docx.body, "DOCX generated for Ada Lovelace");
        assert_eq!(docx.filename, "Ada Lovelace_resume.docx");
    }

    #[test]
    fn test_txt_full_layout_for_sample() {
        let expected = "\
ADA LOVELACE
Senior Software Engineer
ada@example.com • +44 20 7946 0000 • London, UK

PROFESSIONAL SUMMARY
Backend engineer building reliable services in Python and Java.

WORK EXPERIENCE
Software Engineer
Analytical Engines Ltd
2019-01 - Present
Built REST API services on AWS with Docker

EDUCATION
BSc Mathematics
University of London • 2018

TECHNICAL SKILLS
Python, Java, PostgreSQL
Frameworks: Django, Spring
Tools: Git, Jenkins

";
        assert_eq!(render_txt(&sample_resume()), expected);
    }

    #[test]
    fn test_txt_minimal_has_only_header_and_skills() {
        let mut data = ResumeData::default();
        data.personal_info.full_name = "Alan Turing".to_string();
        data.personal_info.professional_title = "Mathematician".to_string();
        data.personal_info.email = "alan@example.com".to_string();
        data.personal_info.phone = "1".to_string();
        data.skills.technical_skills = "Cryptanalysis".to_string();

        assert_eq!(
            render_txt(&data),
            "ALAN TURING\nMathematician\nalan@example.com • 1\n\nTECHNICAL SKILLS\nCryptanalysis\n\n"
        );
    }

    #[test]
    fn test_txt_projects_certifications_achievements() {
        let mut data = sample_resume();
        data.projects.push(Project {
            project_name: "Notes".to_string(),
            description: "Annotated translation".to_string(),
            technologies_used: "Quill".to_string(),
            start_date: Some("1842".to_string()),
            key_features: Some("Bernoulli numbers".to_string()),
            ..Default::default()
        });
        data.certifications.push(Certification {
            name: "Fellow".to_string(),
            issuer: "Royal Society".to_string(),
            issue_date: Some("1843".to_string()),
            credential_id: Some("RS-1".to_string()),
            ..Default::default()
        });
        data.achievements.push(Achievement {
            title: "First program".to_string(),
            description: "Published the first algorithm".to_string(),
            date: Some("1843".to_string()),
            issuer: None,
        });

        let txt = render_txt(&data);
        assert!(txt.contains(
            "PROJECTS\nNotes\nTechnologies: Quill\n1842 - Present\nAnnotated translation\nBernoulli numbers\n\n"
        ));
        assert!(txt.contains("CERTIFICATIONS\nFellow\nRoyal Society • 1843\nCredential ID: RS-1\n\n"));
        assert!(txt.ends_with(
            "ACHIEVEMENTS & AWARDS\nFirst program\n • 1843\nPublished the first algorithm\n\n"
        ));

        let skills_at = txt.find("TECHNICAL SKILLS").unwrap();
        assert!(txt.find("PROJECTS").unwrap() < skills_at);
        assert!(txt.find("CERTIFICATIONS").unwrap() > skills_at);
    }

    #[test]
    fn test_txt_project_without_dates_has_no_date_line() {
        let mut data = sample_resume();
        data.projects.push(Project {
            project_name: "Loom".to_string(),
            description: "Punch cards".to_string(),
            technologies_used: "Wood".to_string(),
            ..Default::default()
        });
        assert!(render_txt(&data).contains("Technologies: Wood\nPunch cards\n\n"));
    }
}
