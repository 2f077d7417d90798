//! Content collection entry types: blog posts and projects.

use super::Document;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// A blog post assembled from a parsed document and its slug.
///
/// Every field has a permissive default; absent frontmatter keys never fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    /// URL-safe identifier derived from the content folder name
    pub slug: String,

    /// Post title
    pub title: String,

    /// Short summary shown in listings
    pub excerpt: String,

    /// Publication date as written in the frontmatter
    pub date: String,

    /// Estimated reading time label (e.g. "5 min")
    pub read_time: String,

    /// Display category (first element when the frontmatter holds a list)
    pub category: String,

    /// Cover image path, rewritten to the published content location
    pub image: String,

    /// Markdown body with frontmatter stripped
    pub content: String,
}

impl BlogPost {
    /// Build a post from a parsed document.
    pub fn from_document(slug: impl Into<String>, doc: &Document) -> Self {
        let slug = slug.into();
        let fm = &doc.frontmatter;
        let image = rewrite_image_path(fm.str("image"), "blog", &slug);

        Self {
            title: fm.str_or("title", "Untitled").to_string(),
            excerpt: fm.str_or("excerpt", "").to_string(),
            date: fm.str_or("date", "").to_string(),
            read_time: fm.str_or("readTime", "").to_string(),
            category: fm.first("category").unwrap_or("Uncategorized").to_string(),
            image,
            content: doc.body.clone(),
            slug,
        }
    }

    /// Parse the frontmatter date for ordering. Unparseable dates yield `None`.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// A portfolio project assembled from a parsed document and its slug.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// URL-safe identifier derived from the content folder name
    pub slug: String,

    /// Project title
    pub title: String,

    /// Short description shown in listings
    pub description: String,

    /// Cover image path, rewritten to the published content location
    pub image: String,

    /// Categories (a scalar frontmatter value becomes a one-element list)
    pub category: Vec<String>,

    /// Technology tags
    pub tech: Vec<String>,

    /// Source repository URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    /// Live deployment URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_link: Option<String>,

    /// Markdown body with frontmatter stripped
    pub content: String,
}

impl Project {
    /// Build a project from a parsed document.
    pub fn from_document(slug: impl Into<String>, doc: &Document) -> Self {
        let slug = slug.into();
        let fm = &doc.frontmatter;
        let image = rewrite_image_path(fm.str("image"), "projects", &slug);

        let category = match fm.list("category") {
            Some(items) => items.to_vec(),
            None => vec![fm.str_or("category", "Other").to_string()],
        };
        let tech = fm.list("tech").map(<[String]>::to_vec).unwrap_or_default();

        Self {
            title: fm.str_or("title", "Untitled").to_string(),
            description: fm.str_or("description", "").to_string(),
            image,
            category,
            tech,
            github: fm.str("github").map(str::to_string),
            live_link: fm.str("liveLink").map(str::to_string),
            content: doc.body.clone(),
            slug,
        }
    }
}

/// Rewrite a frontmatter-relative image path (`./images/...`) to its
/// published location under `/content/<kind>/<slug>/images/`. Absent images
/// fall back to the placeholder.
fn rewrite_image_path(image: Option<&str>, kind: &str, slug: &str) -> String {
    match image {
        Some(path) => path.replacen("./images/", &format!("/content/{kind}/{slug}/images/"), 1),
        None => PLACEHOLDER_IMAGE.to_string(),
    }
}
