use crate::config::LLMConfig;
use crate::llm::client::{GenerationRequest, LLMError, TextGenerator, mentions_bad_credential};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::time::{Duration, Instant};

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const MAX_RETRIES: u32 = 3;
const INITIAL_BACKOFF_MS: u64 = 1000;

// Rate limiting: 10 requests per minute
const RATE_LIMIT_REQUESTS: usize = 10;
const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(60);

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    max_output_tokens: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

pub struct GeminiClient {
    api_base: String,
    model: String,
    http_client: Client,
    // Rate limiting: track request timestamps
    request_times: Mutex<Vec<Instant>>,
}

impl GeminiClient {
    pub fn new(model: String, timeout: Duration) -> Result<Self, LLMError> {
        Self::with_base_url(DEFAULT_API_BASE.to_string(), model, timeout)
    }

    pub fn with_base_url(api_base: String, model: String, timeout: Duration) -> Result<Self, LLMError> {
        let http_client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            model,
            http_client,
            request_times: Mutex::new(Vec::new()),
        })
    }

    pub fn from_config(config: &LLMConfig) -> Result<Self, LLMError> {
        Self::with_base_url(
            config.api_base.clone(),
            config.model.clone(),
            Duration::from_secs(config.timeout_seconds),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    /// Check and enforce rate limiting
    /// Returns Ok(()) if request is allowed, Err with wait time if rate limited
    fn check_rate_limit(&self) -> Result<(), LLMError> {
        let now = Instant::now();
        let mut times = self
            .request_times
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        // Remove requests older than the rate limit window
        times.retain(|&time| now.duration_since(time) < RATE_LIMIT_WINDOW);

        if times.len() >= RATE_LIMIT_REQUESTS {
            let oldest = times[0];
            let wait_time = RATE_LIMIT_WINDOW.saturating_sub(now.duration_since(oldest));
            return Err(LLMError::RateLimitExceeded(wait_time.as_secs()));
        }

        times.push(now);
        Ok(())
    }

    async fn call_api(&self, credential: &str, request: &GenerationRequest) -> Result<String, LLMError> {
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: &request.prompt }],
            }],
            generation_config: request
                .max_output_tokens
                .map(|max_output_tokens| GenerationConfig { max_output_tokens }),
        };

        let mut attempt = 0;
        let mut backoff_ms = INITIAL_BACKOFF_MS;

        loop {
            attempt += 1;

            let response = self
                .http_client
                .post(self.endpoint())
                .header("x-goog-api-key", credential)
                .header("content-type", "application/json")
                .json(&request_body)
                .send()
                .await
                .map_err(|e| if e.is_timeout() { LLMError::Timeout } else { LLMError::NetworkError(e) })?;

            let status = response.status();

            if status.is_success() {
                let body: GenerateContentResponse = response.json().await?;
                return Self::extract_text(body);
            }

            if status == StatusCode::TOO_MANY_REQUESTS || status == StatusCode::SERVICE_UNAVAILABLE {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok());

                if attempt >= MAX_RETRIES {
                    return Err(LLMError::RateLimitExceeded(retry_after.unwrap_or(60)));
                }

                // Exponential backoff, stretched to retry-after when given
                let wait_ms = retry_after.map_or(backoff_ms, |secs| secs.saturating_mul(1000).max(backoff_ms));
                tracing::warn!(
                    status = status.as_u16(),
                    attempt,
                    wait_ms,
                    "Gemini busy, retrying"
                );

                tokio::time::sleep(Duration::from_millis(wait_ms)).await;
                backoff_ms *= 2;
                continue;
            }

            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(Self::classify_failure(status, &error_text));
        }
    }

    /// Map a non-success response to an error, singling out rejected keys
    fn classify_failure(status: StatusCode, body: &str) -> LLMError {
        let message = serde_json::from_str::<ErrorEnvelope>(body)
            .map(|envelope| envelope.error.message)
            .unwrap_or_else(|_| body.to_string());

        if status == StatusCode::UNAUTHORIZED
            || status == StatusCode::FORBIDDEN
            || mentions_bad_credential(body)
        {
            return LLMError::InvalidCredential(message);
        }

        LLMError::ApiError(format!("API returned status {}: {}", status, message))
    }

    fn extract_text(body: GenerateContentResponse) -> Result<String, LLMError> {
        if let Some(reason) = body.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(LLMError::Blocked(reason));
        }

        let Some(candidate) = body.candidates.into_iter().next() else {
            return Err(LLMError::InvalidResponse("No candidates in response".to_string()));
        };

        let text: String = candidate
            .content
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            let reason = candidate.finish_reason.unwrap_or_default();
            return match reason.as_str() {
                "SAFETY" | "BLOCKLIST" | "PROHIBITED_CONTENT" => Err(LLMError::Blocked(reason.clone())),
                _ => Err(LLMError::InvalidResponse("Empty response".to_string())),
            };
        }

        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, credential: &str, request: &GenerationRequest) -> Result<String, LLMError> {
        if credential.trim().is_empty() {
            return Err(LLMError::MissingCredential);
        }

        self.check_rate_limit()?;

        tracing::debug!(model = %self.model, prompt_chars = request.prompt.len(), "Calling Gemini");
        self.call_api(credential, request).await
    }
}
