pub mod audit;
pub mod catalog;
pub mod config;
pub mod error;
pub mod llm;
pub mod ui;
pub mod wizard;

// Re-export commonly used types for convenience
pub use error::{AppError, AppResult};
pub use wizard::{GenerationOutcome, SessionState, Step, Theme, WebsiteOptions, WizardController, WizardError};
