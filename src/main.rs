use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use sitecraft::audit::GenerationLog;
use sitecraft::config::{Config, FileKeyStore};
use sitecraft::llm::GeminiClient;
use sitecraft::ui::App;
use sitecraft::{AppResult, WizardController};
use std::fs::OpenOptions;
use std::io;
use std::panic;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Send tracing output to ~/.config/sitecraft/sitecraft.log
///
/// The terminal belongs to the UI, so nothing is written to stdout/stderr.
/// Logging is skipped entirely when the file cannot be opened.
fn init_tracing() {
    let Ok(dir) = Config::config_dir() else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("sitecraft.log"))
    else {
        return;
    };

    let filter = EnvFilter::try_from_env("SITECRAFT_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}

/// Load config, key store and client, and wire them into the UI
fn build_app() -> AppResult<App> {
    let config = Config::load_or_default()?;
    let key_store = FileKeyStore::new()?.with_env_fallback(config.llm.api_key_env.clone());
    let client = GeminiClient::from_config(&config.llm)?;
    let controller = WizardController::new(Box::new(client), Box::new(key_store))?
        .with_max_output_tokens(config.llm.max_output_tokens);

    tracing::info!(model = %config.llm.model, "Starting sitecraft");

    let mut app = App::new(controller, config);
    match GenerationLog::new() {
        Ok(history) => app = app.with_history(history),
        Err(e) => tracing::warn!("History log disabled: {}", e),
    }
    Ok(app)
}

async fn run(mut app: App) -> AppResult<()> {
    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(result?)
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let result = match build_app() {
        Ok(app) => run(app).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
