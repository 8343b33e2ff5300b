use crate::catalog::{COLOR_PALETTES, FONT_OPTIONS};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selections accumulated over one wizard session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteOptions {
    /// Website type; empty until chosen
    pub site_type: String,
    /// Visual style; empty until chosen
    pub style: String,
    pub colors: Vec<String>,
    pub font: String,
    pub theme: Theme,
}

impl Default for WebsiteOptions {
    fn default() -> Self {
        Self {
            site_type: String::new(),
            style: String::new(),
            colors: COLOR_PALETTES[0].to_colors(),
            font: FONT_OPTIONS[0].to_string(),
            theme: Theme::Light,
        }
    }
}

impl WebsiteOptions {
    /// First field still missing before generation can start, if any
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.site_type.is_empty() {
            Some("type")
        } else if self.style.is_empty() {
            Some("style")
        } else if self.colors.is_empty() {
            Some("colors")
        } else if self.font.is_empty() {
            Some("font")
        } else {
            None
        }
    }

    pub fn primary_color(&self) -> &str {
        self.colors.first().map(String::as_str).unwrap_or_default()
    }

    pub fn secondary_color(&self) -> &str {
        self.colors.get(1).map(String::as_str).unwrap_or_else(|| self.primary_color())
    }

    /// Third color, falling back to the secondary for two-color palettes
    pub fn accent_color(&self) -> &str {
        self.colors.get(2).map(String::as_str).unwrap_or_else(|| self.secondary_color())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_catalog() {
        let options = WebsiteOptions::default();
        assert!(options.site_type.is_empty());
        assert!(options.style.is_empty());
        assert_eq!(options.colors, vec!["#0077b6", "#00b4d8", "#ade8f4"]);
        assert_eq!(options.font, "Roboto");
        assert_eq!(options.theme, Theme::Light);
    }

    #[test]
    fn test_missing_field_order() {
        let mut options = WebsiteOptions::default();
        assert_eq!(options.missing_field(), Some("type"));
        options.site_type = "Blog".to_string();
        assert_eq!(options.missing_field(), Some("style"));
        options.style = "Modern".to_string();
        assert_eq!(options.missing_field(), None);
    }

    #[test]
    fn test_accent_falls_back_to_secondary() {
        let mut options = WebsiteOptions::default();
        options.colors = vec!["#111".to_string(), "#222".to_string()];
        assert_eq!(options.primary_color(), "#111");
        assert_eq!(options.accent_color(), "#222");
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
