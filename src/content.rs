//! Resume content model.
//!
//! The page text lives in `assets/resume.toml`, compiled into the crate and
//! parsed once at startup.

use serde::{Deserialize, Serialize};

use crate::error::VitaeError;
use crate::section::SectionId;

const EMBEDDED: &str = include_str!("../assets/resume.toml");

/// Everything the page displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    /// Header and summary text.
    pub profile: Profile,
    /// Skill groups, in display order.
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    /// Positions, most recent first.
    #[serde(default)]
    pub experience: Vec<Experience>,
    /// Selected projects.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Awards and other achievements.
    #[serde(default)]
    pub achievements: Vec<Achievement>,
    /// Degrees and schools.
    #[serde(default)]
    pub education: Vec<Education>,
}

/// Name, headline and summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Full name shown in the header.
    pub name: String,
    /// One-line headline under the name.
    pub headline: String,
    /// Summary paragraphs.
    #[serde(default)]
    pub summary: Vec<String>,
    /// City / region.
    #[serde(default)]
    pub location: Option<String>,
    /// Contact and profile links shown in the header.
    #[serde(default)]
    pub links: Vec<Link>,
}

/// A labelled external link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Visible text.
    pub label: String,
    /// Target URL (`https:` or `mailto:`).
    pub url: String,
}

/// A named list of skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    /// Group heading.
    pub name: String,
    /// Individual skills.
    pub items: Vec<String>,
}

/// One position held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    /// Job title.
    pub role: String,
    /// Employer.
    pub company: String,
    /// Office location or "Remote".
    #[serde(default)]
    pub location: Option<String>,
    /// Start, as displayed (e.g. "Mar 2021").
    pub start: String,
    /// End, as displayed. `None` for the current position.
    #[serde(default)]
    pub end: Option<String>,
    /// Bullet points.
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl Experience {
    /// Display range, e.g. `"Mar 2021 – Present"`.
    #[must_use]
    pub fn period(&self) -> String {
        format!("{} – {}", self.start, self.end.as_deref().unwrap_or("Present"))
    }
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project name.
    pub name: String,
    /// One-paragraph description.
    pub description: String,
    /// Technologies used.
    #[serde(default)]
    pub tech: Vec<String>,
    /// Repository or demo link.
    #[serde(default)]
    pub link: Option<Link>,
}

/// An award, certification or other achievement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    /// Short title.
    pub title: String,
    /// Optional supporting sentence.
    #[serde(default)]
    pub detail: Option<String>,
    /// Year received.
    #[serde(default)]
    pub year: Option<String>,
}

/// A degree or course of study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    /// School or university.
    pub institution: String,
    /// Degree or qualification.
    pub degree: String,
    /// Display range, e.g. "2013 – 2017".
    pub period: String,
    /// Optional note (honours, thesis, ...).
    #[serde(default)]
    pub detail: Option<String>,
}

impl Resume {
    /// Parse a resume TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`VitaeError::ContentParse`] if the document is malformed or
    /// the `[profile]` table is missing.
    pub fn from_toml_str(content: &str) -> Result<Self, VitaeError> {
        toml::from_str(content)
            .map_err(|e| VitaeError::ContentParse(e.to_string()))
    }

    /// The resume compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns [`VitaeError::ContentParse`] if the embedded document does
    /// not parse.
    pub fn embedded() -> Result<Self, VitaeError> {
        Self::from_toml_str(EMBEDDED)
    }

    /// Whether `section` has anything to show.
    #[must_use]
    pub fn has_content(&self, section: SectionId) -> bool {
        match section {
            SectionId::Summary => !self.profile.summary.is_empty(),
            SectionId::Skills => !self.skills.is_empty(),
            SectionId::Experience => !self.experience.is_empty(),
            SectionId::Projects => !self.projects.is_empty(),
            SectionId::Achievements => !self.achievements.is_empty(),
            SectionId::Education => !self.education.is_empty(),
        }
    }

    /// Sections with content, in page order. The page renders and links
    /// exactly these.
    #[must_use]
    pub fn sections(&self) -> Vec<SectionId> {
        SectionId::ALL
            .into_iter()
            .filter(|&section| self.has_content(section))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_resume_covers_every_section() {
        let resume = Resume::embedded().unwrap();
        assert!(!resume.profile.name.is_empty());
        for section in SectionId::ALL {
            assert!(resume.has_content(section), "{section} is empty");
        }
    }

    #[test]
    fn links_are_https_or_mailto() {
        let resume = Resume::embedded().unwrap();
        let project_links = resume.projects.iter().filter_map(|p| p.link.as_ref());
        for link in resume.profile.links.iter().chain(project_links) {
            assert!(
                link.url.starts_with("https://") || link.url.starts_with("mailto:"),
                "{}",
                link.url
            );
        }
    }

    #[test]
    fn minimal_document_defaults_lists() {
        let resume = Resume::from_toml_str(
            r#"
[profile]
name = "Sam Lee"
headline = "Engineer"
"#,
        )
        .unwrap();
        assert!(resume.skills.is_empty());
        assert!(!resume.has_content(SectionId::Summary));
        assert_eq!(resume.profile.location, None);
    }

    #[test]
    fn sections_skip_empty_ones_in_page_order() {
        let resume = Resume::from_toml_str(
            r#"
[profile]
name = "Sam Lee"
headline = "Engineer"
summary = ["Builds things."]

[[education]]
degree = "BSc Computer Science"
institution = "State University"
period = "2014 – 2018"

[[skills]]
name = "Languages"
items = ["Rust"]
"#,
        )
        .unwrap();
        assert_eq!(
            resume.sections(),
            [SectionId::Summary, SectionId::Skills, SectionId::Education]
        );
        assert_eq!(Resume::embedded().unwrap().sections(), SectionId::ALL);
    }

    #[test]
    fn missing_profile_is_an_error() {
        let err = Resume::from_toml_str("[[skills]]\nname = \"x\"\nitems = []\n")
            .unwrap_err();
        assert!(matches!(err, VitaeError::ContentParse(_)));
    }

    #[test]
    fn current_position_reads_present() {
        let job = Experience {
            role: "Engineer".to_owned(),
            company: "Acme".to_owned(),
            location: None,
            start: "Jan 2022".to_owned(),
            end: None,
            highlights: Vec::new(),
        };
        assert_eq!(job.period(), "Jan 2022 – Present");
        let past = Experience {
            end: Some("Dec 2023".to_owned()),
            ..job
        };
        assert_eq!(past.period(), "Jan 2022 – Dec 2023");
    }
}
