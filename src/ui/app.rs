use crate::audit::{GenerationKind, GenerationLog};
use crate::catalog::{self, COLOR_PALETTES, FONT_OPTIONS, WEBSITE_STYLES, WEBSITE_TYPES};
use crate::config::Config;
use crate::llm::FailureKind;
use crate::ui::code_view::{self, CodeView};
use crate::ui::help::HelpScreen;
use crate::ui::input::InputWidget;
use crate::ui::option_list::OptionGrid;
use crate::ui::palette::{PalettePicker, swatch_spans};
use crate::ui::step_indicator::StepIndicator;
use crate::wizard::{GenerationOutcome, Step, Theme, WizardController, WizardError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{info, warn};

const NOTICE_TTL: Duration = Duration::from_secs(2);
const PAGE: u16 = 10;

/// Focusable fields on the branding screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandingField {
    Palette,
    Font,
    Theme,
    Generate,
}

impl BrandingField {
    fn next(self) -> Self {
        match self {
            BrandingField::Palette => BrandingField::Font,
            BrandingField::Font => BrandingField::Theme,
            BrandingField::Theme => BrandingField::Generate,
            BrandingField::Generate => BrandingField::Palette,
        }
    }

    fn previous(self) -> Self {
        match self {
            BrandingField::Palette => BrandingField::Generate,
            BrandingField::Font => BrandingField::Palette,
            BrandingField::Theme => BrandingField::Font,
            BrandingField::Generate => BrandingField::Theme,
        }
    }
}

/// Short-lived message in the status bar
struct Notice {
    text: String,
    is_error: bool,
    shown_at: Instant,
}

/// Terminal front-end for the website wizard
pub struct App {
    controller: WizardController,
    config: Config,
    history: Option<GenerationLog>,
    should_quit: bool,

    // Widgets
    key_input: InputWidget,
    type_grid: OptionGrid,
    style_grid: OptionGrid,
    branding_field: BrandingField,
    code_view: CodeView,
    help: HelpScreen,

    notice: Option<Notice>,
}

impl App {
    pub fn new(controller: WizardController, config: Config) -> Self {
        let mut key_input = InputWidget::masked(" Gemini API key ");
        key_input.set_active(true);

        let type_labels = WEBSITE_TYPES
            .iter()
            .map(|t| format!("{} {}", t.icon, t.name))
            .collect();
        let style_labels = WEBSITE_STYLES.iter().map(|s| s.to_string()).collect();

        Self {
            controller,
            config,
            history: None,
            should_quit: false,
            key_input,
            type_grid: OptionGrid::new(type_labels, 3),
            style_grid: OptionGrid::new(style_labels, 4),
            branding_field: BrandingField::Palette,
            code_view: CodeView::new(),
            help: HelpScreen::new(),
            notice: None,
        }
    }

    /// Record every generation call in `history`
    pub fn with_history(mut self, history: GenerationLog) -> Self {
        self.history = Some(history);
        self
    }

    pub fn controller(&self) -> &WizardController {
        &self.controller
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn branding_field(&self) -> BrandingField {
        self.branding_field
    }

    /// Text of the status-bar notice, if one is still showing
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_ref().map(|n| n.text.as_str())
    }

    /// Run the application event loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let tick = Duration::from_millis(self.config.ui.tick_ms);

        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(tick)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key_event(key, terminal).await?;
                }
            } else {
                self.expire_notice();
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn expire_notice(&mut self) {
        if self
            .notice
            .as_ref()
            .is_some_and(|n| n.shown_at.elapsed() >= NOTICE_TTL)
        {
            self.notice = None;
        }
    }

    fn show_notice(&mut self, text: impl Into<String>) {
        self.set_notice(text.into(), false);
    }

    fn show_error_notice(&mut self, text: impl Into<String>) {
        self.set_notice(text.into(), true);
    }

    fn set_notice(&mut self, text: String, is_error: bool) {
        self.notice = Some(Notice {
            text,
            is_error,
            shown_at: Instant::now(),
        });
    }

    /// Controller rejected an action; nothing changed, tell the user why
    fn report(&mut self, err: WizardError) {
        warn!("Action rejected: {}", err);
        self.show_error_notice(err.to_string());
    }

    /// Handle keyboard events
    pub async fn handle_key_event<B: Backend>(
        &mut self,
        key: KeyEvent,
        terminal: &mut Terminal<B>,
    ) -> io::Result<()> {
        // Only handle key press events (not release or repeat)
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Ok(());
        }

        if self.help.visible {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.help.hide();
            }
            return Ok(());
        }

        if !self.controller.is_unlocked() {
            self.handle_credential_key(key);
            return Ok(());
        }

        match key.code {
            KeyCode::Char('k') if ctrl => {
                self.revoke_credential("revoked by user");
                return Ok(());
            }
            KeyCode::Char('?') => {
                self.help.toggle();
                return Ok(());
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
                return Ok(());
            }
            _ => {}
        }

        match self.controller.step() {
            Step::Type => self.handle_type_key(key),
            Step::Style => self.handle_style_key(key),
            Step::Branding => self.handle_branding_key(key, terminal).await?,
            Step::DescriptionConfirm => self.handle_confirm_key(key, terminal).await?,
            Step::Done => self.handle_done_key(key),
            Step::DescriptionGeneration | Step::CodeGeneration => {
                // No input while a generation call is running
            }
        }
        Ok(())
    }

    fn handle_credential_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                if self.key_input.is_empty() {
                    return;
                }
                let key = self.key_input.take_input();
                match self.controller.submit_credential(&key) {
                    Ok(()) => {
                        self.type_grid.select(0);
                        self.show_notice("API key saved");
                    }
                    Err(e) => self.report(e),
                }
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {
                self.key_input.handle_key(key);
            }
        }
    }

    fn revoke_credential(&mut self, reason: &str) {
        match self.controller.revoke_credential() {
            Ok(()) => {
                if let Some(history) = &self.history
                    && let Err(e) = history.log_credential_revoked(reason)
                {
                    warn!("Failed to write history log: {}", e);
                }
                self.key_input.clear();
                self.branding_field = BrandingField::Palette;
                self.code_view.reset();
            }
            Err(e) => self.report(e),
        }
    }

    /// Esc/Backspace on the steps that offer generic back navigation
    fn is_back_key(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Esc | KeyCode::Backspace)
    }

    fn handle_type_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left => self.type_grid.move_left(),
            KeyCode::Right => self.type_grid.move_right(),
            KeyCode::Up => self.type_grid.move_up(),
            KeyCode::Down => self.type_grid.move_down(),
            KeyCode::Enter => {
                let name = WEBSITE_TYPES[self.type_grid.selected()].name;
                if let Err(e) = self.controller.select_type(name) {
                    self.report(e);
                }
            }
            _ => {}
        }
    }

    fn handle_style_key(&mut self, key: KeyEvent) {
        if Self::is_back_key(&key) {
            self.go_back();
            return;
        }

        match key.code {
            KeyCode::Left => self.style_grid.move_left(),
            KeyCode::Right => self.style_grid.move_right(),
            KeyCode::Up => self.style_grid.move_up(),
            KeyCode::Down => self.style_grid.move_down(),
            KeyCode::Enter => {
                let name = WEBSITE_STYLES[self.style_grid.selected()];
                if let Err(e) = self.controller.select_style(name) {
                    self.report(e);
                }
            }
            _ => {}
        }
    }

    fn go_back(&mut self) {
        if !self.controller.can_go_back() {
            return;
        }
        if let Err(e) = self.controller.back() {
            self.report(e);
        }
    }

    /// Index of the current colors in the catalog, if they come from one
    fn palette_index(&self) -> Option<usize> {
        let colors = &self.controller.options().colors;
        catalog::palette_for(colors)
            .and_then(|p| COLOR_PALETTES.iter().position(|c| c.name == p.name))
    }

    fn font_index(&self) -> usize {
        let font = &self.controller.options().font;
        FONT_OPTIONS.iter().position(|f| f == font).unwrap_or(0)
    }

    fn cycle(index: usize, len: usize, forward: bool) -> usize {
        if forward {
            (index + 1) % len
        } else {
            (index + len - 1) % len
        }
    }

    fn change_branding_value(&mut self, forward: bool) {
        let result = match self.branding_field {
            BrandingField::Palette => {
                let next = match self.palette_index() {
                    Some(i) => Self::cycle(i, COLOR_PALETTES.len(), forward),
                    None => 0,
                };
                self.controller.set_colors(COLOR_PALETTES[next].to_colors())
            }
            BrandingField::Font => {
                let next = Self::cycle(self.font_index(), FONT_OPTIONS.len(), forward);
                self.controller.set_font(FONT_OPTIONS[next])
            }
            BrandingField::Theme => {
                let theme = self.controller.options().theme.toggled();
                self.controller.set_theme(theme)
            }
            BrandingField::Generate => Ok(()),
        };

        if let Err(e) = result {
            self.report(e);
        }
    }

    async fn handle_branding_key<B: Backend>(
        &mut self,
        key: KeyEvent,
        terminal: &mut Terminal<B>,
    ) -> io::Result<()> {
        if Self::is_back_key(&key) {
            self.go_back();
            return Ok(());
        }

        match key.code {
            KeyCode::Tab => self.branding_field = self.branding_field.next(),
            KeyCode::BackTab => self.branding_field = self.branding_field.previous(),
            KeyCode::Down if self.branding_field != BrandingField::Palette => {
                self.branding_field = self.branding_field.next()
            }
            KeyCode::Up if self.branding_field != BrandingField::Palette => {
                self.branding_field = self.branding_field.previous()
            }
            // The palette list scrolls vertically, the other fields horizontally
            KeyCode::Down => self.change_branding_value(true),
            KeyCode::Up => self.change_branding_value(false),
            KeyCode::Right => self.change_branding_value(true),
            KeyCode::Left => self.change_branding_value(false),
            KeyCode::Char(' ') if self.branding_field == BrandingField::Theme => {
                self.change_branding_value(true)
            }
            KeyCode::Enter if self.branding_field == BrandingField::Generate => {
                self.generate_description(terminal).await?;
            }
            KeyCode::Enter => self.branding_field = BrandingField::Generate,
            KeyCode::Char('g') => self.generate_description(terminal).await?,
            _ => {}
        }
        Ok(())
    }

    async fn generate_description<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        if let Err(e) = self.controller.confirm_branding() {
            self.report(e);
            return Ok(());
        }

        // Show the loading screen before awaiting the call
        terminal.draw(|f| self.render(f))?;

        match self.controller.generate_description().await {
            Ok(outcome) => {
                let chars = self.controller.description().len();
                self.record(GenerationKind::Description, outcome, chars);
            }
            Err(e) => self.report(e),
        }
        Ok(())
    }

    async fn handle_confirm_key<B: Backend>(
        &mut self,
        key: KeyEvent,
        terminal: &mut Terminal<B>,
    ) -> io::Result<()> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') => {
                if let Err(e) = self.controller.confirm_description() {
                    self.report(e);
                    return Ok(());
                }
                terminal.draw(|f| self.render(f))?;

                match self.controller.generate_code().await {
                    Ok(outcome) => {
                        let chars = self.controller.generated_code().len();
                        self.record(GenerationKind::Code, outcome, chars);
                        self.code_view.reset();
                    }
                    Err(e) => self.report(e),
                }
            }
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => {
                if let Err(e) = self.controller.reject_description() {
                    self.report(e);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_done_key(&mut self, key: KeyEvent) {
        let code = self.controller.generated_code();
        match key.code {
            KeyCode::Up => self.code_view.scroll_up(1),
            KeyCode::Down => self.code_view.scroll_down(1, code),
            KeyCode::PageUp => self.code_view.scroll_up(PAGE),
            KeyCode::PageDown => self.code_view.scroll_down(PAGE, code),
            KeyCode::Home => self.code_view.reset(),
            KeyCode::Char('s') => self.save_code(),
            KeyCode::Char('n') => match self.controller.start_new_project() {
                Ok(()) => {
                    self.code_view.reset();
                    self.branding_field = BrandingField::Palette;
                }
                Err(e) => self.report(e),
            },
            _ => {}
        }
    }

    fn save_code(&mut self) {
        let path = self.config.ui.output_file.clone();
        match code_view::save_code(&path, self.controller.generated_code()) {
            Ok(()) => {
                info!(path = %path.display(), "Saved generated website");
                self.show_notice(format!("Saved to {}", path.display()));
            }
            Err(e) => {
                warn!(path = %path.display(), "Failed to save generated website: {}", e);
                self.show_error_notice(format!("Could not save {}: {}", path.display(), e));
            }
        }
    }

    /// Write the finished call to the history log
    fn record(&self, kind: GenerationKind, outcome: GenerationOutcome, chars: usize) {
        let Some(history) = &self.history else {
            return;
        };

        let options = self.controller.options();
        let result = match outcome {
            GenerationOutcome::Completed => history.log_generation(kind, options, Ok(chars)),
            GenerationOutcome::Failed { kind: failure } => {
                let reason = self.controller.error().unwrap_or("unknown error");
                history.log_generation(kind, options, Err(reason)).and_then(|_| {
                    if failure == FailureKind::Credential {
                        history.log_credential_revoked("rejected by API")
                    } else {
                        Ok(())
                    }
                })
            }
        };

        if let Err(e) = result {
            warn!("Failed to write history log: {}", e);
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        frame.render_widget(Clear, frame.area());

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(8),    // Content
                Constraint::Length(1), // Status
            ])
            .split(frame.area());

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "Sitecraft",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " · AI website builder",
                Style::default().fg(Color::Magenta),
            ),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        if self.controller.is_unlocked() {
            self.render_wizard(frame, chunks[1]);
        } else {
            self.render_credential_gate(frame, chunks[1]);
        }

        self.render_status(frame, chunks[2]);

        if self.help.visible {
            self.help.render(frame, centered(frame.area(), 70, 24));
        }
    }

    fn render_credential_gate(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(6),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        let intro = vec![
            Line::from(Span::styled(
                "🔑 Enter your API key",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Sitecraft needs a Google Gemini API key to generate websites."),
            Line::from("The key is stored in ~/.config/sitecraft/credentials (owner read/write only)."),
            Line::from(Span::styled(
                "Get a key at https://aistudio.google.com/app/apikey",
                Style::default().fg(Color::Cyan),
            )),
        ];
        frame.render_widget(Paragraph::new(intro).wrap(Wrap { trim: false }), chunks[0]);
        frame.render_widget(&self.key_input, chunks[1]);

        if let Some(error) = self.controller.error() {
            frame.render_widget(error_banner(error), chunks[2]);
        }
    }

    fn render_wizard(&self, frame: &mut Frame, area: Rect) {
        let step = self.controller.step();
        let error = self.controller.error();

        let mut constraints = Vec::new();
        if step.is_input_step() {
            constraints.push(Constraint::Length(2));
        }
        if error.is_some() {
            constraints.push(Constraint::Length(3));
        }
        constraints.push(Constraint::Min(0));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(1)
            .constraints(constraints)
            .split(area);

        let mut next = 0;
        if step.is_input_step() {
            frame.render_widget(StepIndicator::new(step), chunks[next]);
            next += 1;
        }
        if let Some(error) = error {
            frame.render_widget(error_banner(error), chunks[next]);
            next += 1;
        }
        let body = chunks[next];

        if self.controller.is_loading() || step.is_generating() {
            self.render_loading(frame, body, step);
            return;
        }

        match step {
            Step::Type => self.render_choice(
                frame,
                body,
                "What type of website do you want to build?".to_string(),
                &self.type_grid,
            ),
            Step::Style => self.render_choice(
                frame,
                body,
                format!("Choose a style for your {} website", self.controller.options().site_type),
                &self.style_grid,
            ),
            Step::Branding => self.render_branding(frame, body),
            Step::DescriptionConfirm => self.render_description(frame, body),
            Step::Done => self.render_done(frame, body),
            Step::DescriptionGeneration | Step::CodeGeneration => {}
        }
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect, step: Step) {
        let message = if step == Step::DescriptionGeneration {
            "⏳ Generating wireframe description..."
        } else {
            "⚙️  Building your website... This may take a moment."
        };
        let loading = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(loading, centered(area, area.width.saturating_sub(4), 3));
    }

    fn render_choice(&self, frame: &mut Frame, area: Rect, heading: String, grid: &OptionGrid) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        frame.render_widget(
            Paragraph::new(heading)
                .alignment(Alignment::Center)
                .style(Style::default().add_modifier(Modifier::BOLD)),
            chunks[0],
        );
        frame.render_widget(grid, chunks[1]);
    }

    fn render_branding(&self, frame: &mut Frame, area: Rect) {
        let options = self.controller.options();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(COLOR_PALETTES.len() as u16 + 2),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        frame.render_widget(
            PalettePicker::new(
                COLOR_PALETTES,
                self.palette_index(),
                self.branding_field == BrandingField::Palette,
            ),
            chunks[0],
        );

        frame.render_widget(
            field(
                "Font",
                Line::from(format!("◀ {} ▶", options.font)),
                self.branding_field == BrandingField::Font,
            ),
            chunks[1],
        );

        let theme_line = Line::from(
            Theme::ALL
                .iter()
                .map(|theme| {
                    let style = if *theme == options.theme {
                        Style::default().fg(Color::Black).bg(Color::Cyan)
                    } else {
                        Style::default().fg(Color::Gray)
                    };
                    Span::styled(format!(" {} ", theme), style)
                })
                .collect::<Vec<_>>(),
        );
        frame.render_widget(
            field("Theme", theme_line, self.branding_field == BrandingField::Theme),
            chunks[2],
        );

        let generate_style = if self.branding_field == BrandingField::Generate {
            Style::default().fg(Color::Black).bg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green)
        };
        frame.render_widget(
            Paragraph::new("✨ Generate Description")
                .alignment(Alignment::Center)
                .style(generate_style)
                .block(Block::default().borders(Borders::ALL)),
            chunks[3],
        );
    }

    fn render_description(&self, frame: &mut Frame, area: Rect) {
        let options = self.controller.options();
        let mut summary = vec![
            Span::styled(
                format!("{} · {} · {} · {} ", options.site_type, options.style, options.font, options.theme),
                Style::default().fg(Color::Gray),
            ),
        ];
        summary.extend(swatch_spans(&options.colors));

        let lines = vec![
            Line::from(Span::styled(
                "Here's the plan for your website:",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(summary),
            Line::from(""),
            Line::from(self.controller.description().to_string()),
            Line::from(""),
            Line::from(Span::styled(
                "Does this sound good? Enter builds the full website, Esc goes back.",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL)),
            area,
        );
    }

    fn render_done(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let heading = Line::from(vec![
            Span::raw("Your "),
            Span::styled(
                self.controller.options().site_type.clone(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                " website is ready! Press s to save it as {}.",
                self.config.ui.output_file.display()
            )),
        ]);
        frame.render_widget(Paragraph::new(heading).alignment(Alignment::Center), chunks[0]);
        let output = &self.config.ui.output_file;
        let file_name = output
            .file_name()
            .map(|name| name.to_string_lossy())
            .unwrap_or_else(|| output.to_string_lossy());
        frame.render_widget(
            self.code_view.widget(self.controller.generated_code(), &file_name),
            chunks[1],
        );
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        if let Some(notice) = &self.notice {
            let (mark, color) = if notice.is_error {
                ("✗", Color::Red)
            } else {
                ("✓", Color::Green)
            };
            frame.render_widget(
                Paragraph::new(format!("{} {}", mark, notice.text)).style(Style::default().fg(color)),
                area,
            );
            return;
        }

        let status_text = if !self.controller.is_unlocked() {
            "Enter: save key | Esc: quit"
        } else {
            match self.controller.step() {
                Step::Type => "←↑↓→: choose | Enter: select | ?: help | q: quit",
                Step::Style => "←↑↓→: choose | Enter: select | Esc: back | q: quit",
                Step::Branding => "Tab: next field | ←→: change | Enter: generate | Esc: back",
                Step::DescriptionGeneration | Step::CodeGeneration => "Please wait...",
                Step::DescriptionConfirm => "Enter: build it | Esc: go back | Ctrl+K: reset key",
                Step::Done => "↑↓ PgUp PgDn: scroll | s: save | n: new project | q: quit",
            }
        };

        frame.render_widget(
            Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}

fn error_banner(message: &str) -> Paragraph<'_> {
    Paragraph::new(message)
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
}

fn field<'a>(title: &'a str, value: Line<'a>, focused: bool) -> Paragraph<'a> {
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    Paragraph::new(value).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    )
}

/// Rect of at most `width` x `height` centered in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
