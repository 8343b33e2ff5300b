use crate::catalog::Palette;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Parse "#rgb" or "#rrggbb" into a terminal color
pub fn parse_hex_color(token: &str) -> Option<Color> {
    let hex = token.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let expand = |i: usize| channel(&hex[i..i + 1].repeat(2));
            Some(Color::Rgb(expand(0)?, expand(1)?, expand(2)?))
        }
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

/// Color blocks for a list of color tokens
pub fn swatch_spans(colors: &[impl AsRef<str>]) -> Vec<Span<'static>> {
    colors
        .iter()
        .map(|c| {
            let color = parse_hex_color(c.as_ref()).unwrap_or(Color::Gray);
            Span::styled("██ ", Style::default().fg(color))
        })
        .collect()
}

/// Palette chooser: one row per palette, the selected one marked
pub struct PalettePicker<'a> {
    palettes: &'a [Palette],
    selected: Option<usize>,
    focused: bool,
}

impl<'a> PalettePicker<'a> {
    pub fn new(palettes: &'a [Palette], selected: Option<usize>, focused: bool) -> Self {
        Self {
            palettes,
            selected,
            focused,
        }
    }
}

impl Widget for PalettePicker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .palettes
            .iter()
            .enumerate()
            .map(|(i, palette)| {
                let is_selected = self.selected == Some(i);
                let marker = if is_selected { "▶ " } else { "  " };
                let name_style = if is_selected {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Gray)
                };

                let mut spans = vec![
                    Span::styled(marker, Style::default().fg(Color::Cyan)),
                    Span::styled(format!("{:<18}", palette.name), name_style),
                ];
                spans.extend(swatch_spans(palette.colors));
                Line::from(spans)
            })
            .collect();

        let border = if self.focused { Color::Yellow } else { Color::DarkGray };
        Paragraph::new(lines)
            .block(
                Block::default()
                    .title("Brand colors")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            )
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_hex() {
        assert_eq!(parse_hex_color("#0077b6"), Some(Color::Rgb(0x00, 0x77, 0xb6)));
        assert_eq!(parse_hex_color("#FFFFFF"), Some(Color::Rgb(255, 255, 255)));
    }

    #[test]
    fn test_parse_short_hex() {
        assert_eq!(parse_hex_color("#000"), Some(Color::Rgb(0, 0, 0)));
        assert_eq!(parse_hex_color("#1a2"), Some(Color::Rgb(0x11, 0xaa, 0x22)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_hex_color("0077b6"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#zzzzzz"), None);
        assert_eq!(parse_hex_color("#é12"), None);
    }

    #[test]
    fn test_swatch_per_color() {
        assert_eq!(swatch_spans(&["#000", "#fff", "bogus"]).len(), 3);
    }
}
