use std::io;
use thiserror::Error;

use crate::config::key_store::KeyStoreError;
use crate::config::settings::ConfigError;
use crate::llm::client::LLMError;
use crate::wizard::controller::WizardError;

/// Top-level application error that wraps all module-specific errors
///
/// All module errors convert to AppError via the `From` trait, so the binary
/// can use `?` across module boundaries.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Key store error: {0}")]
    KeyStore(#[from] KeyStoreError),

    #[error("LLM error: {0}")]
    Llm(#[from] LLMError),

    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for application-level operations
pub type AppResult<T> = std::result::Result<T, AppError>;
