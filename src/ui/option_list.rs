use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Grid of labelled choices with one highlighted cell
pub struct OptionGrid {
    items: Vec<String>,
    columns: usize,
    selected: usize,
}

impl OptionGrid {
    pub fn new(items: Vec<String>, columns: usize) -> Self {
        Self {
            items,
            columns: columns.max(1),
            selected: 0,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected = index;
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn move_left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.selected >= self.columns {
            self.selected -= self.columns;
        }
    }

    pub fn move_down(&mut self) {
        if self.selected + self.columns < self.items.len() {
            self.selected += self.columns;
        }
    }

    fn rows(&self) -> usize {
        self.items.len().div_ceil(self.columns)
    }
}

impl Widget for &OptionGrid {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(3); self.rows()])
            .split(area);

        for (row_index, row_area) in rows.iter().enumerate() {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, self.columns as u32); self.columns])
                .split(*row_area);

            for (col, cell) in cells.iter().enumerate() {
                let index = row_index * self.columns + col;
                let Some(label) = self.items.get(index) else {
                    break;
                };

                let style = if index == self.selected {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };

                Paragraph::new(label.as_str())
                    .alignment(Alignment::Center)
                    .style(style)
                    .block(Block::default().borders(Borders::ALL))
                    .render(*cell, buf);
            }
        }
    }
}
