use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const SHORTCUTS: &[(&str, &str)] = &[
    ("↑ ↓ ← →", "Move between choices"),
    ("Enter", "Select / confirm / generate"),
    ("Tab", "Next branding field"),
    ("Esc", "Back (Style, Branding, description review)"),
    ("s", "Save generated code (result screen)"),
    ("n", "Start a new project (result screen)"),
    ("Ctrl+K", "Forget the API key"),
    ("?", "Show/hide this help"),
    ("q", "Quit"),
];

pub struct HelpScreen {
    pub visible: bool,
}

impl HelpScreen {
    pub fn new() -> Self {
        HelpScreen { visible: false }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Sitecraft Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black));

        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(SHORTCUTS.len() as u16 + 2),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);

        let mut shortcuts = vec![
            Line::from(Span::styled(
                "Keyboard Shortcuts:",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        shortcuts.extend(SHORTCUTS.iter().map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("  {:<11}", key), Style::default().fg(Color::Cyan)),
                Span::raw(*action),
            ])
        }));

        frame.render_widget(
            Paragraph::new(shortcuts).style(Style::default().fg(Color::White)),
            chunks[0],
        );

        frame.render_widget(
            Paragraph::new(Line::from("─".repeat(inner.width as usize)))
                .style(Style::default().fg(Color::DarkGray)),
            chunks[1],
        );

        let config_info = vec![
            Line::from(Span::styled(
                "Configuration:",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  Config file:  ", Style::default().fg(Color::Cyan)),
                Span::raw("~/.config/sitecraft/config.toml"),
            ]),
            Line::from(vec![
                Span::styled("  History log:  ", Style::default().fg(Color::Cyan)),
                Span::raw("~/.config/sitecraft/history.log"),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Press '?' or Esc to close this help screen",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )),
        ];

        frame.render_widget(
            Paragraph::new(config_info)
                .style(Style::default().fg(Color::White))
                .wrap(Wrap { trim: false }),
            chunks[2],
        );
    }
}

impl Default for HelpScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_screen_toggle() {
        let mut help = HelpScreen::new();
        assert!(!help.visible);

        help.toggle();
        assert!(help.visible);

        help.hide();
        assert!(!help.visible);
    }
}
