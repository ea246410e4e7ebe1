//! Outcome types for a single text-generation call.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Sampling temperature sent with every request.
pub const SAMPLING_TEMPERATURE: f32 = 0.4;

/// Successful generation: the model's text, treated as opaque markdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedPlan {
    pub text: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
}

/// Token accounting reported by the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Broad category of a failed generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationErrorKind {
    /// Connection, DNS, TLS or timeout failure.
    Transport,
    /// Credentials were refused (401/403).
    Authentication,
    /// Rate limit or quota exhausted (429).
    Quota,
    /// Endpoint reported an internal error (5xx).
    Server,
    /// Request refused for another reason (other 4xx).
    Rejected,
    /// Success status but the body had no usable text.
    MalformedResponse,
}

impl fmt::Display for GenerationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GenerationErrorKind::Transport => "transport",
            GenerationErrorKind::Authentication => "authentication",
            GenerationErrorKind::Quota => "quota",
            GenerationErrorKind::Server => "server",
            GenerationErrorKind::Rejected => "rejected",
            GenerationErrorKind::MalformedResponse => "malformed response",
        };
        f.write_str(label)
    }
}

/// Failure descriptor for a generation call.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("Generation failed ({kind}): {message}")]
pub struct GenerationError {
    pub kind: GenerationErrorKind,
    pub message: String,
    /// Underlying diagnostic text (transport error, response body).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl GenerationError {
    pub fn new(kind: GenerationErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into(), detail: None }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Either the generated plan or why it could not be produced.
pub type GenerationResult = Result<GeneratedPlan, GenerationError>;
