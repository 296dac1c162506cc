//! The closed catalogue of page sections.
//!
//! Navigation links target sections by their DOM id, so the id strings
//! returned by [`SectionId::as_str`] are part of the page's public surface
//! and must not change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the six content regions of the page.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// Short professional summary.
    Summary,
    /// Grouped skill lists.
    Skills,
    /// Work experience timeline.
    Experience,
    /// Selected projects.
    Projects,
    /// Awards and achievements.
    Achievements,
    /// Education history.
    Education,
}

impl SectionId {
    /// Every section, in page order.
    pub const ALL: [Self; 6] = [
        Self::Summary,
        Self::Skills,
        Self::Experience,
        Self::Projects,
        Self::Achievements,
        Self::Education,
    ];

    /// Number of sections on the page.
    pub const COUNT: usize = Self::ALL.len();

    /// DOM id of the section element.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Achievements => "achievements",
            Self::Education => "education",
        }
    }

    /// Heading shown above the section and in the navigation bar.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Summary => "Summary",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Achievements => "Achievements",
            Self::Education => "Education",
        }
    }

    /// In-page anchor (`#summary`, ...).
    #[must_use]
    pub fn anchor(self) -> String {
        format!("#{}", self.as_str())
    }

    /// Position of this section in [`SectionId::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a section by DOM id. Returns `None` for any id outside the
    /// catalogue.
    #[must_use]
    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == id)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing a string that names no known section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section id: {}", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_dom_id(s).ok_or_else(|| UnknownSection(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_the_fixed_dom_anchors() {
        let ids: Vec<&str> = SectionId::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            ids,
            [
                "summary",
                "skills",
                "experience",
                "projects",
                "achievements",
                "education"
            ]
        );
    }

    #[test]
    fn index_matches_catalogue_position() {
        for (i, section) in SectionId::ALL.iter().enumerate() {
            assert_eq!(section.index(), i);
        }
    }

    #[test]
    fn lookup_by_dom_id() {
        assert_eq!(SectionId::from_dom_id("projects"), Some(SectionId::Projects));
        assert_eq!(SectionId::from_dom_id("Projects"), None);
        assert_eq!(SectionId::from_dom_id("contact"), None);
        assert_eq!("education".parse::<SectionId>(), Ok(SectionId::Education));
        assert!("".parse::<SectionId>().is_err());
    }

    #[test]
    fn anchor_prefixes_hash() {
        assert_eq!(SectionId::Skills.anchor(), "#skills");
    }
}
