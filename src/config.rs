//! Site configuration loading.
//!
//! The configuration is a single JSON document describing the site owner and
//! the copy for each page section. There is no process-wide cached instance:
//! [`SiteConfig::load`] reads the file once and the caller passes the value
//! (or a clone, which is cheap) to whoever needs it.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level site configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site owner identity and links
    pub user_info: UserInfo,

    /// Homepage hero copy
    pub hero_section: HeroSection,

    /// About-me cards
    pub about_me_sections: Vec<IconCard>,

    /// About-me long-form Markdown
    pub about_me_content: String,

    /// Skill groups shown on the homepage
    pub technical_skills_and_expertise_section: Vec<SkillGroup>,

    /// Contact cards
    pub contact_section: Vec<IconCard>,
}

impl SiteConfig {
    /// Load and validate a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&raw)?;
        log::info!("loaded site config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw)
            .map_err(|e| Error::InvalidConfig(e.to_string()))
    }
}

/// Identity block for the site owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub links: SocialLinks,
    pub resume_file_name: String,
}

/// External profile links.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
}

/// Homepage hero copy and buttons.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub greeting: String,
    pub title: String,
    pub description: String,
    pub hero_icon: String,
    pub hero_image_text: HeroImageText,
    pub buttons: HeroButtons,
}

/// Two-line caption on the hero image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroImageText {
    pub field1_text: String,
    pub field2_text: String,
}

/// Hero call-to-action labels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroButtons {
    pub primary: String,
    pub secondary: String,
}

/// A titled card with an icon and body text (about-me and contact sections).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconCard {
    pub icon: String,
    pub title: String,
    pub text: String,
}

/// A named group of skill tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub icon: String,
    pub title: String,
    pub tags: Vec<String>,
}
