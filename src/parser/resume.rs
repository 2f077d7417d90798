//! Resume segmentation.
//!
//! Walks a resume body line by line and groups it into typed sections and
//! items:
//!
//! - `## Title` opens a section (category by keyword match on the title)
//! - `### Title` opens an item within the current section
//! - `**Organization | Date**` fills the current item's labels
//! - `- bullet` appends to the current item's description
//! - `**Category**` inside a skills section starts a technology shortcut:
//!   the immediately following bullets become a synthesized item
//!
//! A section or item is closed only by a heading of equal-or-higher level or
//! by end of input; blank and unrecognized lines never close anything. The
//! parser is lenient: there is no malformed input, only ignored lines.

use super::{format_inline, ParseOptions};
use crate::model::{Resume, ResumeItem, ResumeSection, RichText};

/// Segment a resume body into typed sections with default options.
pub fn parse_resume(body: &str) -> Resume {
    parse_resume_with_options(body, &ParseOptions::default())
}

/// Segment a resume body into typed sections.
///
/// # Example
///
/// ```
/// use foliomd::parser::parse_resume;
/// use foliomd::SectionKind;
///
/// let resume = parse_resume("## Experience\n### Engineer\n- Shipped things\n");
/// assert_eq!(resume.sections[0].kind, SectionKind::Experience);
/// ```
pub fn parse_resume_with_options(body: &str, options: &ParseOptions) -> Resume {
    let lines: Vec<&str> = body.lines().collect();
    let mut sections: Vec<ResumeSection> = Vec::new();
    let mut open_section: Option<ResumeSection> = None;
    let mut open_item: Option<ResumeItem> = None;

    let style = |text: &str| -> RichText {
        if options.inline_markup {
            format_inline(text)
        } else {
            RichText::plain(text)
        }
    };

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();
        i += 1;

        if line.is_empty() {
            continue;
        }

        if let Some(title) = line.strip_prefix("## ") {
            // New section: flush the open item, then the open section.
            if let Some(section) = open_section.as_mut() {
                if let Some(item) = open_item.take() {
                    section.items.push(item);
                }
            }
            if let Some(section) = open_section.take() {
                sections.push(section);
            }
            open_section = Some(ResumeSection::new(title));
        } else if let Some(title) = line.strip_prefix("### ") {
            // New item: flush the previous one into the current section.
            if let Some(section) = open_section.as_mut() {
                if let Some(item) = open_item.take() {
                    section.items.push(item);
                }
            }
            open_item = Some(ResumeItem::with_title(style(title)));
        } else if line.starts_with("**") && line.contains('|') {
            if let Some(item) = open_item.as_mut() {
                let stripped = line.replace("**", "");
                let (organization, date) =
                    stripped.split_once('|').unwrap_or((stripped.as_str(), ""));
                item.organization = Some(style(organization.trim()));
                item.date = Some(style(date.trim()));
            }
        } else if let Some(bullet) = line.strip_prefix("- ") {
            if let Some(item) = open_item.as_mut() {
                item.description.push(style(bullet));
            }
        } else if line.starts_with("**") && line.ends_with("**") && line.len() > 4 {
            // Technology-category shortcut, meaningful only in skills
            // sections: the label plus its trailing bullets become one
            // synthesized item appended directly to the section.
            let in_skills = open_section
                .as_ref()
                .is_some_and(|s| s.kind == crate::model::SectionKind::Skills);
            if in_skills {
                let category = line.replace("**", "");
                let (technologies, consumed) = collect_technologies(&lines[i..], options);
                if !technologies.is_empty() {
                    let section = open_section.as_mut().expect("skills section is open");
                    section.items.push(ResumeItem {
                        title: Some(RichText::plain(category)),
                        description: technologies.iter().map(|t| RichText::plain(t.clone())).collect(),
                        technologies,
                        ..Default::default()
                    });
                    i += consumed;
                }
            }
        }
        // Any other non-blank line carries no structure and is ignored.
    }

    // End of input: flush the open item, then the open section.
    if let Some(section) = open_section.as_mut() {
        if let Some(item) = open_item.take() {
            section.items.push(item);
        }
    }
    if let Some(section) = open_section.take() {
        sections.push(section);
    }

    Resume { sections }
}

/// Sub-scan for the skills shortcut: collect the run of consecutive bullet
/// lines at the start of `rest`. Returns the technology list (markup
/// stripped) and the number of lines consumed, which the caller adds to its
/// scan index.
fn collect_technologies(rest: &[&str], options: &ParseOptions) -> (Vec<String>, usize) {
    let mut technologies = Vec::new();
    let mut consumed = 0;

    for line in rest {
        let Some(tech) = line.trim().strip_prefix("- ") else {
            break;
        };
        let tech = if options.inline_markup {
            format_inline(tech).plain_text()
        } else {
            tech.to_string()
        };
        technologies.push(tech);
        consumed += 1;
    }

    (technologies, consumed)
}
