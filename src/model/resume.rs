//! Resume model types: typed sections and items.

use super::RichText;
use serde::{Deserialize, Serialize};

/// A segmented resume: the ordered sections of the document body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    /// Sections in document order
    pub sections: Vec<ResumeSection>,
}

impl Resume {
    /// Create an empty resume.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the first section of a given kind.
    pub fn section(&self, kind: SectionKind) -> Option<&ResumeSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check whether the resume has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Category of a resume section, derived from its heading title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Work experience ("experience" or "work" in the title)
    Experience,
    /// Education
    Education,
    /// Skills
    Skills,
    /// Projects
    Projects,
    /// Anything else
    Other,
}

impl SectionKind {
    /// Classify a section title by keyword substring, case-insensitive.
    ///
    /// Keywords are checked in a fixed order and the first match wins.
    pub fn from_title(title: &str) -> Self {
        let lower = title.to_lowercase();
        if lower.contains("experience") || lower.contains("work") {
            SectionKind::Experience
        } else if lower.contains("education") {
            SectionKind::Education
        } else if lower.contains("skill") {
            SectionKind::Skills
        } else if lower.contains("project") {
            SectionKind::Projects
        } else {
            SectionKind::Other
        }
    }
}

/// One heading-level-2 block of a resume body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeSection {
    /// Section category
    pub kind: SectionKind,

    /// Heading text as written
    pub title: String,

    /// Items in document order
    pub items: Vec<ResumeItem>,
}

impl ResumeSection {
    /// Create an empty section, classifying the title.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            kind: SectionKind::from_title(&title),
            title,
            items: Vec::new(),
        }
    }
}

/// One heading-level-3 entry (or synthesized skills entry) within a section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeItem {
    /// Item heading (job title, project name, skills category)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<RichText>,

    /// Organization or category label (left half of a `**label | date**` line)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<RichText>,

    /// Date label (right half of a `**label | date**` line)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<RichText>,

    /// Description bullets in document order
    pub description: Vec<RichText>,

    /// Technology tags (skills items only)
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub technologies: Vec<String>,
}

impl ResumeItem {
    /// Create an empty item with a title.
    pub fn with_title(title: RichText) -> Self {
        Self {
            title: Some(title),
            ..Default::default()
        }
    }

    /// Check whether the item carries no content at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.organization.is_none()
            && self.date.is_none()
            && self.description.is_empty()
            && self.technologies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_kind_from_title() {
        assert_eq!(
            SectionKind::from_title("Professional Experience"),
            SectionKind::Experience
        );
        assert_eq!(SectionKind::from_title("Work History"), SectionKind::Experience);
        assert_eq!(SectionKind::from_title("Education"), SectionKind::Education);
        assert_eq!(
            SectionKind::from_title("Technical Skills"),
            SectionKind::Skills
        );
        assert_eq!(SectionKind::from_title("Projects"), SectionKind::Projects);
        assert_eq!(SectionKind::from_title("Volunteering"), SectionKind::Other);
    }

    #[test]
    fn test_section_kind_first_match_wins() {
        // "Work Projects" hits the experience keywords before projects
        assert_eq!(
            SectionKind::from_title("Work Projects"),
            SectionKind::Experience
        );
    }

    #[test]
    fn test_resume_section_lookup() {
        let mut resume = Resume::new();
        resume.sections.push(ResumeSection::new("Experience"));
        resume.sections.push(ResumeSection::new("Skills"));

        assert!(resume.section(SectionKind::Skills).is_some());
        assert!(resume.section(SectionKind::Education).is_none());
        assert_eq!(resume.len(), 2);
    }

    #[test]
    fn test_item_is_empty() {
        assert!(ResumeItem::default().is_empty());

        let item = ResumeItem::with_title(RichText::plain("Engineer"));
        assert!(!item.is_empty());
    }
}
