use crate::wizard::WebsiteOptions;

/// Prompt for the short layout description shown before any code is built
pub fn description_prompt(options: &WebsiteOptions) -> String {
    format!(
        "You are a UX designer writing a wireframe description for a website builder.
Using the choices below, describe the layout of the website in 3-4 sentences.
Name the main sections (hero, about, services, contact, ...) and how each one looks.
Do not write any code.

- Website type: {site_type}
- Style: {style}
- Colors: {colors}
- Font: {font}
- Theme: {theme}",
        site_type = options.site_type,
        style = options.style,
        colors = options.colors.join(", "),
        font = options.font,
        theme = options.theme,
    )
}

/// Prompt for the complete HTML document built from the confirmed description
pub fn code_prompt(options: &WebsiteOptions, description: &str) -> String {
    format!(
        "You are an expert web developer. Produce one complete, self-contained HTML file for the website below.

RULES:
- Output ONLY the HTML document, starting with <!DOCTYPE html>. No explanations.
- Put all CSS in a single <style> element in <head>. Plain CSS only, no frameworks or JavaScript libraries.
- Load the font from Google Fonts with a <link> in <head> and apply it to body.
- Make the layout responsive with flexbox, grid and media queries.
- Use semantic HTML5 elements, alt text on every image, a <title> and a meta description.
- Use realistic placeholder copy for this kind of site and images from https://picsum.photos/WIDTH/HEIGHT.
- Add short HTML comments at the top telling the owner where to edit text, links and images.
- Add subtle hover transitions on links and buttons.

SPECIFICATION:
- Website type: {site_type}
- Style: {style}
- Colors: {colors} (primary {primary}, secondary {secondary}, accent {accent})
- Font: {font}
- Theme: {theme}
- Layout: {description}",
        site_type = options.site_type,
        style = options.style,
        colors = options.colors.join(", "),
        primary = options.primary_color(),
        secondary = options.secondary_color(),
        accent = options.accent_color(),
        font = options.font,
        theme = options.theme,
        description = description.trim(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::Theme;

    fn blog_options() -> WebsiteOptions {
        WebsiteOptions {
            site_type: "Blog".to_string(),
            style: "Modern".to_string(),
            colors: vec!["#000".to_string(), "#111".to_string(), "#222".to_string()],
            font: "Lato".to_string(),
            theme: Theme::Dark,
        }
    }

    #[test]
    fn test_description_prompt_embeds_choices() {
        let prompt = description_prompt(&blog_options());
        assert!(prompt.contains("Website type: Blog"));
        assert!(prompt.contains("Style: Modern"));
        assert!(prompt.contains("#000, #111, #222"));
        assert!(prompt.contains("Font: Lato"));
        assert!(prompt.contains("Theme: dark"));
    }

    #[test]
    fn test_code_prompt_roles_and_description() {
        let prompt = code_prompt(&blog_options(), "  A dark, modern blog layout. ");
        assert!(prompt.contains("primary #000, secondary #111, accent #222"));
        assert!(prompt.contains("Layout: A dark, modern blog layout."));
        assert!(prompt.contains("<!DOCTYPE html>"));
    }

    #[test]
    fn test_code_prompt_two_color_accent() {
        let mut options = blog_options();
        options.colors.truncate(2);
        let prompt = code_prompt(&options, "desc");
        assert!(prompt.contains("accent #111"));
    }
}
