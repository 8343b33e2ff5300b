//! Static option catalog offered by the wizard.

/// A selectable kind of website
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebsiteType {
    pub name: &'static str,
    pub icon: &'static str,
}

/// A named, ordered set of brand colors offered as one choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub colors: &'static [&'static str],
}

impl Palette {
    /// Owned copy of the palette colors, as stored in `WebsiteOptions`
    pub fn to_colors(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.to_string()).collect()
    }
}

pub const WEBSITE_TYPES: &[WebsiteType] = &[
    WebsiteType { name: "Portfolio", icon: "🖼" },
    WebsiteType { name: "Business", icon: "💼" },
    WebsiteType { name: "Blog", icon: "📝" },
    WebsiteType { name: "Landing Page", icon: "🚀" },
    WebsiteType { name: "E-commerce", icon: "🛒" },
    WebsiteType { name: "Personal", icon: "🙂" },
];

pub const WEBSITE_STYLES: &[&str] = &[
    "Modern",
    "Minimalist",
    "Colorful",
    "Gradient",
    "Futuristic",
    "Corporate",
    "Playful",
];

pub const COLOR_PALETTES: &[Palette] = &[
    Palette { name: "Oceanic Blue", colors: &["#0077b6", "#00b4d8", "#ade8f4"] },
    Palette { name: "Sunset Gradient", colors: &["#ff6b6b", "#feca57", "#ff9f43"] },
    Palette { name: "Forest Green", colors: &["#2d6a4f", "#40916c", "#95d5b2"] },
    Palette { name: "Royal Purple", colors: &["#5a189a", "#7b2cbf", "#c77dff"] },
    Palette { name: "Monochrome", colors: &["#212529", "#6c757d", "#dee2e6"] },
    Palette { name: "Vibrant Coral", colors: &["#ff7f50", "#ff6347", "#ff4500"] },
    Palette { name: "Deep Black", colors: &["#000000", "#212529", "#495057"] },
    Palette {
        name: "Vibrant Rainbow",
        colors: &["#ef4444", "#f97316", "#eab308", "#22c55e", "#3b82f6", "#8b5cf6"],
    },
];

pub const FONT_OPTIONS: &[&str] = &["Roboto", "Open Sans", "Lato", "Montserrat", "Poppins", "Nunito"];

pub fn is_website_type(name: &str) -> bool {
    WEBSITE_TYPES.iter().any(|t| t.name == name)
}

pub fn is_style(name: &str) -> bool {
    WEBSITE_STYLES.contains(&name)
}

pub fn is_font(name: &str) -> bool {
    FONT_OPTIONS.contains(&name)
}

/// Find the catalog palette whose colors match exactly
pub fn palette_for(colors: &[String]) -> Option<&'static Palette> {
    COLOR_PALETTES
        .iter()
        .find(|p| p.colors.len() == colors.len() && p.colors.iter().zip(colors).all(|(a, b)| *a == b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_palette_has_at_least_two_colors() {
        for palette in COLOR_PALETTES {
            assert!(palette.colors.len() >= 2, "{} is too short", palette.name);
        }
    }

    #[test]
    fn test_lookup_helpers() {
        assert!(is_website_type("Landing Page"));
        assert!(!is_website_type("landing page"));
        assert!(is_style("Playful"));
        assert!(is_font("Open Sans"));
        assert!(!is_font("Comic Sans"));
    }

    #[test]
    fn test_palette_for_matches_exact_colors() {
        let forest = COLOR_PALETTES[2].to_colors();
        assert_eq!(palette_for(&forest).map(|p| p.name), Some("Forest Green"));

        let custom = vec!["#000".to_string(), "#111".to_string()];
        assert!(palette_for(&custom).is_none());
    }
}
