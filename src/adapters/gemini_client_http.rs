//! Gemini `generateContent` client implementation using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use url::Url;

use crate::domain::configuration::api_key_from_lookup;
use crate::domain::{
    AppError, GeneratedPlan, GenerationApiConfig, GenerationError, GenerationErrorKind,
    GenerationResult, RenderedPrompt, SAMPLING_TEMPERATURE, TokenUsage,
};
use crate::ports::GenerationClient;

const X_GOOG_API_KEY: &str = "X-Goog-Api-Key";
const MAX_DETAIL_CHARS: usize = 512;

/// HTTP client for the Gemini text-generation API.
#[derive(Clone)]
pub struct HttpGenerationClient {
    api_key: String,
    endpoint: Url,
    model: String,
    client: Client,
}

impl std::fmt::Debug for HttpGenerationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGenerationClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGenerationClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &GenerationApiConfig) -> Result<Self, AppError> {
        if api_key.trim().is_empty() {
            return Err(AppError::config_error("API key must not be empty"));
        }
        config.validate()?;
        let endpoint = config.generate_content_url()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))?;

        debug!(endpoint = %endpoint, model = %config.model, "Generation client ready");
        Ok(Self { api_key: api_key.trim().to_string(), endpoint, model: config.model.clone(), client })
    }

    /// Create from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_env_with_config(&GenerationApiConfig::from_env()?)
    }

    /// Create with the API key from the environment and a custom configuration.
    pub fn from_env_with_config(config: &GenerationApiConfig) -> Result<Self, AppError> {
        let api_key = api_key_from_lookup(|name| std::env::var(name).ok())?;
        Self::new(api_key, config)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: RequestGenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestGenerationConfig {
    temperature: f32,
    candidate_count: u32,
}

impl<'a> ApiRequest<'a> {
    fn new(prompt: &'a str) -> Self {
        Self {
            contents: vec![RequestContent { role: "user", parts: vec![RequestPart { text: prompt }] }],
            generation_config: RequestGenerationConfig {
                temperature: SAMPLING_TEMPERATURE,
                candidate_count: 1,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
    #[serde(default)]
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: Option<u32>,
    #[serde(default)]
    candidates_token_count: Option<u32>,
    #[serde(default)]
    total_token_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl GenerationClient for HttpGenerationClient {
    fn generate(&self, prompt: &RenderedPrompt) -> GenerationResult {
        let request = ApiRequest::new(prompt.as_str());
        debug!(model = %self.model, prompt_chars = prompt.as_str().len(), "Sending generateContent request");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(X_GOOG_API_KEY, &self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .map_err(transport_error)?;

        let status = response.status();
        let body = response.text().map_err(|e| {
            GenerationError::new(GenerationErrorKind::Transport, "Failed to read response body")
                .with_detail(e.to_string())
        })?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Generation request failed");
            return Err(map_status_error(status, &body));
        }

        let plan = parse_plan(&body, &self.model)?;
        debug!(
            finish_reason = plan.finish_reason.as_deref().unwrap_or("unknown"),
            response_chars = plan.text.len(),
            "Received generateContent response"
        );
        Ok(plan)
    }

    fn model(&self) -> &str {
        &self.model
    }
}

fn transport_error(err: reqwest::Error) -> GenerationError {
    let message = if err.is_timeout() {
        "Generation request timed out"
    } else if err.is_connect() {
        "Could not connect to the generation endpoint"
    } else {
        "HTTP request failed"
    };
    warn!(error = %err, "{message}");
    GenerationError::new(GenerationErrorKind::Transport, message).with_detail(err.to_string())
}

fn map_status_error(status: StatusCode, body: &str) -> GenerationError {
    let code = status.as_u16();
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .map_or_else(|| truncate(body), |error| error.message);

    let error = match code {
        401 | 403 => GenerationError::new(
            GenerationErrorKind::Authentication,
            format!("Request was not authorized ({code}): {message}"),
        ),
        400 if body.contains("API_KEY_INVALID") => GenerationError::new(
            GenerationErrorKind::Authentication,
            format!("API key was rejected ({code}): {message}"),
        ),
        429 => GenerationError::new(GenerationErrorKind::Quota, quota_message(&message)),
        _ if status.is_server_error() => GenerationError::new(
            GenerationErrorKind::Server,
            format!("Server error ({code}): {message}"),
        ),
        _ => GenerationError::new(
            GenerationErrorKind::Rejected,
            format!("API error ({code}): {message}"),
        ),
    };
    error.with_detail(truncate(body))
}

/// Turn a 429 message into a user-facing hint, using Gemini's "Please retry in Ns" when present.
fn quota_message(message: &str) -> String {
    const RETRY_MARKER: &str = "Please retry in ";

    let seconds = message.find(RETRY_MARKER).and_then(|pos| {
        let rest = &message[pos + RETRY_MARKER.len()..];
        let end = rest.find('s')?;
        rest[..end].parse::<f64>().ok()
    });

    match seconds {
        Some(seconds) => format!(
            "AI service quota exceeded. Please try again in {} seconds.",
            seconds.ceil() as u64
        ),
        None => "AI service quota exceeded. Please wait a moment and try again.".to_string(),
    }
}

fn parse_plan(body: &str, model: &str) -> GenerationResult {
    let response: ApiResponse = serde_json::from_str(body).map_err(|e| {
        GenerationError::new(
            GenerationErrorKind::MalformedResponse,
            format!("Failed to parse response: {e}"),
        )
        .with_detail(truncate(body))
    })?;

    if let Some(error) = response.error {
        return Err(GenerationError::new(
            GenerationErrorKind::Rejected,
            format!("API error: {}", error.message),
        )
        .with_detail(truncate(body)));
    }

    let candidate = response.candidates.first();
    let text: String = candidate
        .and_then(|candidate| candidate.content.as_ref())
        .map(|content| content.parts.iter().filter_map(|part| part.text.as_deref()).collect())
        .unwrap_or_default();
    let finish_reason = candidate.and_then(|candidate| candidate.finish_reason.clone());

    if text.trim().is_empty() {
        let block_reason = response.prompt_feedback.and_then(|feedback| feedback.block_reason);
        let message = match (block_reason, &finish_reason) {
            (Some(reason), _) => format!("No text in response (prompt blocked: {reason})"),
            (None, Some(reason)) => format!("No text in response (finish reason: {reason})"),
            (None, None) => "No text in response".to_string(),
        };
        return Err(GenerationError::new(GenerationErrorKind::MalformedResponse, message)
            .with_detail(truncate(body)));
    }

    let usage = response.usage_metadata.map(|usage| TokenUsage {
        prompt_tokens: usage.prompt_token_count.unwrap_or(0),
        completion_tokens: usage.candidates_token_count.unwrap_or(0),
        total_tokens: usage.total_token_count.unwrap_or(0),
    });

    Ok(GeneratedPlan { text, model: model.to_string(), finish_reason, usage })
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_DETAIL_CHARS {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(MAX_DETAIL_CHARS).collect();
    truncated.push('…');
    truncated
}
