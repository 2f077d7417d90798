//! Plain text rendering.

use crate::model::{Resume, RichText};

/// Render rich text to markup-free plain text.
pub fn to_text(rich: &RichText) -> String {
    rich.plain_text()
}

/// Render a whole resume to plain text, one section per block.
///
/// Intended for terminal display and search indexing, not for layout.
pub fn resume_to_text(resume: &Resume) -> String {
    let mut out = String::new();
    for section in &resume.sections {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(&section.title);
        out.push('\n');

        for item in &section.items {
            if let Some(title) = &item.title {
                out.push_str("  ");
                out.push_str(&title.plain_text());
                out.push('\n');
            }
            if let (Some(org), Some(date)) = (&item.organization, &item.date) {
                out.push_str("  ");
                out.push_str(&org.plain_text());
                out.push_str(" | ");
                out.push_str(&date.plain_text());
                out.push('\n');
            }
            for bullet in &item.description {
                out.push_str("    - ");
                out.push_str(&bullet.plain_text());
                out.push('\n');
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{format_inline, parse_resume};

    #[test]
    fn test_to_text_strips_markup() {
        let rich = format_inline("**bold** and `code`");
        assert_eq!(to_text(&rich), "bold and code");
    }

    #[test]
    fn test_resume_to_text() {
        let resume = parse_resume(
            "## Experience\n### Engineer\n**Acme | 2020**\n- Built things\n",
        );
        let text = resume_to_text(&resume);
        assert!(text.contains("Experience\n"));
        assert!(text.contains("  Engineer\n"));
        assert!(text.contains("  Acme | 2020\n"));
        assert!(text.contains("    - Built things\n"));
    }
}
