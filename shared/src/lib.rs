use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod content;
pub mod menu;
pub mod rotator;
pub mod viewport;

pub use content::{
    ContentError, NavLink, Owner, Project, SiteContent, SkillGroup, SocialLink, ThemedAsset,
};
pub use menu::{MenuEvent, MenuState};
pub use rotator::{WORD_ROTATION_INTERVAL_MS, WordCycle};
pub use viewport::{
    ActiveSectionTracker, BACK_TO_TOP_THRESHOLD, HEADER_HIDDEN_TOP_PX, SECTION_VISIBILITY_THRESHOLD,
    ScrollSignals, ScrollState, ScrollTracker, SectionVisibility, TRACKED_SECTIONS,
};

// ===== THEME =====

/// Visual mode of the page. Every themed asset carries one variant per value.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// The other theme. Applying it twice yields the original value.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown theme '{0}', expected 'light' or 'dark'")]
pub struct ThemeParseError(pub String);

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(ThemeParseError(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_defaults_to_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_double_toggle_restores_theme() {
        for theme in Theme::ALL {
            assert_eq!(theme.toggled().toggled(), theme);
        }
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_theme_parsing() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(" Dark ".parse::<Theme>(), Ok(Theme::Dark));
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}
