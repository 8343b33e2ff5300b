use async_trait::async_trait;
use thiserror::Error;

/// Message fragments that identify a rejected credential in free-text errors
const CREDENTIAL_MARKERS: &[&str] = &[
    "api key not valid",
    "api_key_invalid",
    "invalid api key",
    "api key not found",
];

/// Errors that can occur during LLM operations
#[derive(Debug, Error)]
pub enum LLMError {
    #[error("API key not found. Enter your Gemini API key to continue")]
    MissingCredential,

    #[error("Your API key is not valid: {0}")]
    InvalidCredential(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Rate limit exceeded, retry after {0}s")]
    RateLimitExceeded(u64),

    #[error("Request timeout")]
    Timeout,

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Response was blocked: {0}")]
    Blocked(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// How the wizard reacts to a failed generation call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The credential is missing or rejected; it must be re-entered
    Credential,
    /// Anything else; the user may retry with the same credential
    Transient,
}

impl LLMError {
    pub fn kind(&self) -> FailureKind {
        match self {
            LLMError::MissingCredential | LLMError::InvalidCredential(_) => FailureKind::Credential,
            LLMError::ApiError(msg) | LLMError::InvalidResponse(msg) if mentions_bad_credential(msg) => {
                FailureKind::Credential
            }
            _ => FailureKind::Transient,
        }
    }

    pub fn is_credential_error(&self) -> bool {
        self.kind() == FailureKind::Credential
    }
}

/// Substring check used for collaborators that only report free text
pub fn mentions_bad_credential(message: &str) -> bool {
    let lower = message.to_lowercase();
    CREDENTIAL_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// One prompt sent to the text generation service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub max_output_tokens: Option<u32>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_output_tokens: None,
        }
    }

    pub fn with_max_output_tokens(mut self, tokens: u32) -> Self {
        self.max_output_tokens = Some(tokens);
        self
    }
}

/// Trait for hosted models that turn a prompt into free-form text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for the request, authorizing with `credential`
    async fn generate(&self, credential: &str, request: &GenerationRequest) -> Result<String, LLMError>;
}
