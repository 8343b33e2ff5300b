use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use std::fs;
use std::io;
use std::path::Path;

/// Scroll state for the generated code on the result screen
#[derive(Debug, Default)]
pub struct CodeView {
    scroll: u16,
}

impl CodeView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// Scroll down, never past the last line of `code`
    pub fn scroll_down(&mut self, lines: u16, code: &str) {
        let max = code.lines().count().saturating_sub(1).min(u16::MAX as usize) as u16;
        self.scroll = self.scroll.saturating_add(lines).min(max);
    }

    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    /// Widget for `code`, titled with the file it will be saved as
    pub fn widget<'a>(&self, code: &'a str, file_name: &'a str) -> CodeBlock<'a> {
        CodeBlock {
            code,
            file_name,
            scroll: self.scroll,
        }
    }
}

/// Line-numbered view of a code string
pub struct CodeBlock<'a> {
    code: &'a str,
    file_name: &'a str,
    scroll: u16,
}

impl Widget for CodeBlock<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let total = self.code.lines().count();
        let width = total.to_string().len();

        let lines: Vec<Line> = self
            .code
            .lines()
            .enumerate()
            .map(|(i, line)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>width$} ", i + 1, width = width),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(line, Style::default().fg(Color::White)),
                ])
            })
            .collect();

        let title = format!(" {} · {} lines ", self.file_name, total);
        Paragraph::new(lines)
            .scroll((self.scroll, 0))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }
}

/// Write the generated page to `path`, creating parent directories
pub fn save_code(path: &Path, code: &str) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut contents = code.to_string();
    if !contents.ends_with('\n') {
        contents.push('\n');
    }
    fs::write(path, contents)
}
