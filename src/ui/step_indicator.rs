use crate::wizard::Step;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// "(1) Type ── (2) Style ── (3) Branding" progress line
pub struct StepIndicator {
    current: Step,
}

impl StepIndicator {
    pub fn new(current: Step) -> Self {
        Self { current }
    }

    fn spans(&self) -> Vec<Span<'static>> {
        let mut spans = Vec::new();

        for (index, step) in Step::INPUT_STEPS.iter().enumerate() {
            let reached = self.current >= *step;
            let style = if reached {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(format!("({}) {}", index + 1, step.label()), style));

            if index + 1 < Step::INPUT_STEPS.len() {
                let connector = if self.current > *step { Color::Cyan } else { Color::DarkGray };
                spans.push(Span::styled(" ──── ", Style::default().fg(connector)));
            }
        }

        spans
    }
}

impl Widget for StepIndicator {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(self.spans()))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
