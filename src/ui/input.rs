use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Single-line text input, optionally masking what is typed
pub struct InputWidget {
    input: String,
    /// Byte offset into `input`, always on a char boundary
    cursor_position: usize,
    prompt: String,
    masked: bool,
    active: bool,
}

impl InputWidget {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            input: String::new(),
            cursor_position: 0,
            prompt: prompt.into(),
            masked: false,
            active: false,
        }
    }

    /// Input for secrets: every character renders as '•'
    pub fn masked(prompt: impl Into<String>) -> Self {
        Self {
            masked: true,
            ..Self::new(prompt)
        }
    }

    /// Set whether the input widget is active (focused)
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    return false;
                }

                self.input.insert(self.cursor_position, c);
                self.cursor_position += c.len_utf8();
                true
            }
            KeyCode::Backspace => {
                if let Some(prev) = self.prev_boundary() {
                    self.input.remove(prev);
                    self.cursor_position = prev;
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor_position < self.input.len() {
                    self.input.remove(self.cursor_position);
                }
                true
            }
            KeyCode::Left => {
                if let Some(prev) = self.prev_boundary() {
                    self.cursor_position = prev;
                }
                true
            }
            KeyCode::Right => {
                if let Some(c) = self.input[self.cursor_position..].chars().next() {
                    self.cursor_position += c.len_utf8();
                }
                true
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                true
            }
            KeyCode::End => {
                self.cursor_position = self.input.len();
                true
            }
            _ => false,
        }
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.input[..self.cursor_position]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    /// Take the current input and clear the widget
    pub fn take_input(&mut self) -> String {
        self.cursor_position = 0;
        std::mem::take(&mut self.input)
    }

    /// Get the current input (without clearing)
    pub fn get_input(&self) -> &str {
        &self.input
    }

    pub fn is_empty(&self) -> bool {
        self.input.trim().is_empty()
    }

    /// Clear the input
    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor_position = 0;
    }

    fn display(&self, text: &str) -> String {
        if self.masked {
            "•".repeat(text.chars().count())
        } else {
            text.to_string()
        }
    }
}

impl Widget for &InputWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let before = self.display(&self.input[..self.cursor_position]);
        let after = self.display(&self.input[self.cursor_position..]);

        let display_text = if self.active {
            format!("{}▊{}", before, after)
        } else {
            format!("{}{}", before, after)
        };

        let color = if self.active { Color::Yellow } else { Color::DarkGray };

        let block = Block::default()
            .title(self.prompt.as_str())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));

        Paragraph::new(display_text)
            .style(Style::default().fg(color))
            .block(block)
            .render(area, buf);
    }
}
