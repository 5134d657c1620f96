//! Static site content, compiled into the binary from `content.toml`.
//!
//! Content is authored once and never mutated at runtime. Validation runs when
//! the embedded document is parsed, so authoring defects (a themed asset with
//! one variant, a nav link to an unknown section) fail loudly in tests instead
//! of producing a half-rendered page.

use crate::viewport::TRACKED_SECTIONS;
use crate::Theme;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const EMBEDDED_CONTENT: &str = include_str!("../content.toml");

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to parse site content: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("rotating title list is empty")]
    EmptyTitles,
    #[error("themed asset '{asset}' is missing its {theme} variant")]
    MissingVariant { asset: String, theme: Theme },
    #[error("navigation link '{label}' targets unknown section '{section_id}'")]
    UnknownSection { label: String, section_id: String },
    #[error("section '{0}' is linked more than once in the navigation")]
    DuplicateSection(String),
}

/// Light/dark pair of asset paths.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ThemedAsset {
    pub light: String,
    pub dark: String,
}

impl ThemedAsset {
    pub fn for_theme(&self, theme: Theme) -> &str {
        match theme {
            Theme::Light => &self.light,
            Theme::Dark => &self.dark,
        }
    }

    fn validate(&self, asset: &str) -> Result<(), ContentError> {
        for theme in Theme::ALL {
            if self.for_theme(theme).trim().is_empty() {
                return Err(ContentError::MissingVariant {
                    asset: asset.to_string(),
                    theme,
                });
            }
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Owner {
    pub name: String,
    /// Hero heading, one entry per line.
    pub heading_lines: Vec<String>,
    pub logo: String,
    pub tagline: String,
    pub bio: Vec<String>,
    pub email: String,
    pub location: String,
    pub resume: String,
    pub profile_image: String,
    pub about_image: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NavLink {
    pub label: String,
    pub section_id: String,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.section_id)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: ThemedAsset,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SkillGroup {
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SiteContent {
    pub owner: Owner,
    pub rotating_titles: Vec<String>,
    pub theme_icon: ThemedAsset,
    pub back_to_top_icon: ThemedAsset,
    pub nav: Vec<NavLink>,
    pub social: Vec<SocialLink>,
    pub skill_groups: Vec<SkillGroup>,
    pub projects: Vec<Project>,
}

impl SiteContent {
    /// Content bundled with the build.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_toml(EMBEDDED_CONTENT)
    }

    pub fn from_toml(source: &str) -> Result<Self, ContentError> {
        let content: SiteContent = toml::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.rotating_titles.is_empty() {
            return Err(ContentError::EmptyTitles);
        }

        self.theme_icon.validate("theme_icon")?;
        self.back_to_top_icon.validate("back_to_top_icon")?;
        for link in &self.social {
            link.icon.validate(&format!("social.{}", link.name))?;
        }

        let mut linked = HashSet::new();
        for link in &self.nav {
            if !TRACKED_SECTIONS.contains(&link.section_id.as_str()) {
                return Err(ContentError::UnknownSection {
                    label: link.label.clone(),
                    section_id: link.section_id.clone(),
                });
            }
            if !linked.insert(link.section_id.as_str()) {
                return Err(ContentError::DuplicateSection(link.section_id.clone()));
            }
        }
        Ok(())
    }

    /// Section ids that have a navigation link, in navigation order.
    pub fn linked_sections(&self) -> Vec<String> {
        self.nav.iter().map(|link| link.section_id.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn embedded() -> SiteContent {
        SiteContent::embedded().expect("embedded content must be valid")
    }

    #[test]
    fn test_embedded_content_is_valid() {
        let content = embedded();
        assert_eq!(
            content.rotating_titles,
            vec!["Web Developer", "Designer", "Graphic Artist", "Kupal"]
        );
        assert_eq!(content.owner.logo, "NYC");
        assert_eq!(content.social.len(), 3);
    }

    #[test]
    fn test_nav_covers_all_tracked_sections() {
        let content = embedded();
        assert_eq!(content.linked_sections(), TRACKED_SECTIONS.to_vec());
        assert_eq!(content.nav[0].href(), "#home");
    }

    #[test]
    fn test_themed_asset_selection() {
        let content = embedded();
        let icon = &content.theme_icon;
        assert_ne!(icon.for_theme(Theme::Light), icon.for_theme(Theme::Dark));
        assert!(icon.for_theme(Theme::Light).ends_with("sun.svg"));
    }

    #[test]
    fn test_missing_variant_is_rejected() {
        let source = EMBEDDED_CONTENT.replacen(
            "dark = \"/_api/public/icons/arrow-up-dark.svg\"",
            "dark = \"\"",
            1,
        );
        match SiteContent::from_toml(&source) {
            Err(ContentError::MissingVariant { asset, theme }) => {
                assert_eq!(asset, "back_to_top_icon");
                assert_eq!(theme, Theme::Dark);
            }
            other => panic!("expected missing variant error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let mut content = embedded();
        content.nav.push(NavLink {
            label: "Blog".to_string(),
            section_id: "blog".to_string(),
        });
        assert!(matches!(
            content.validate(),
            Err(ContentError::UnknownSection { .. })
        ));
    }

    #[test]
    fn test_duplicate_section_is_rejected() {
        let mut content = embedded();
        let first = content.nav[0].clone();
        content.nav.push(first);
        assert!(matches!(
            content.validate(),
            Err(ContentError::DuplicateSection(id)) if id == "home"
        ));
    }

    #[test]
    fn test_empty_titles_are_rejected() {
        let mut content = embedded();
        content.rotating_titles.clear();
        assert!(matches!(content.validate(), Err(ContentError::EmptyTitles)));
    }

    #[test]
    fn test_malformed_document_reports_parse_error() {
        assert!(matches!(
            SiteContent::from_toml("owner = 42"),
            Err(ContentError::Parse(_))
        ));
    }
}
