pub mod client;
pub mod gemini;
pub mod prompts;
pub mod response;

pub use client::{FailureKind, GenerationRequest, LLMError, TextGenerator};
pub use gemini::GeminiClient;
pub use response::strip_code_fence;
