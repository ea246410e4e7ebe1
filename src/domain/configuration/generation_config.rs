//! Generation endpoint configuration.

use url::Url;

use crate::domain::AppError;

/// Variable holding the API key.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";
/// Accepted when [`API_KEY_ENV`] is unset.
pub const API_KEY_FALLBACK_ENV: &str = "GEMINI_API_KEY";
/// Overrides the API base URL.
pub const API_URL_ENV: &str = "DIETPLAN_API_URL";
/// Overrides the model identifier.
pub const MODEL_ENV: &str = "DIETPLAN_MODEL";

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
/// Request timeout applied when the HTTP client is built.
pub const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Where and how generation requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationApiConfig {
    /// API base URL, without the `/models/...` suffix.
    pub api_url: Url,
    /// Model identifier, without the `models/` prefix.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl GenerationApiConfig {
    /// Build a validated configuration from a base URL and model identifier.
    pub fn new(api_url: &str, model: &str) -> Result<Self, AppError> {
        let api_url = Url::parse(api_url.trim())
            .map_err(|e| AppError::config_error(format!("Invalid endpoint URL '{api_url}': {e}")))?;
        let config = Self {
            api_url,
            model: normalize_model(model),
            timeout_secs: REQUEST_TIMEOUT_SECS,
        };
        config.validate()?;
        Ok(config)
    }

    /// Resolve configuration through `lookup`, applying defaults for unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = non_blank(lookup(API_URL_ENV)).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let model = non_blank(lookup(MODEL_ENV)).unwrap_or_else(|| DEFAULT_MODEL.to_string());
        Self::new(&api_url, &model)
    }

    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if !matches!(self.api_url.scheme(), "http" | "https") {
            return Err(AppError::config_error(format!(
                "Endpoint URL must use http or https: {}",
                self.api_url
            )));
        }
        if self.api_url.host_str().is_none_or(str::is_empty) {
            return Err(AppError::config_error(format!(
                "Endpoint URL has no host: {}",
                self.api_url
            )));
        }
        if self.model.is_empty() {
            return Err(AppError::config_error("Model identifier must not be empty"));
        }
        if self.model.chars().any(|c| c.is_whitespace() || c == '/') {
            return Err(AppError::config_error(format!(
                "Model identifier '{}' must not contain whitespace or '/'",
                self.model
            )));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        Ok(())
    }

    /// Full `generateContent` URL for the configured model.
    pub fn generate_content_url(&self) -> Result<Url, AppError> {
        let base = self.api_url.as_str().trim_end_matches('/');
        let endpoint = format!("{}/models/{}:generateContent", base, self.model);
        Url::parse(&endpoint)
            .map_err(|e| AppError::config_error(format!("Invalid endpoint URL '{endpoint}': {e}")))
    }
}

/// Resolve the API key through `lookup`, preferring [`API_KEY_ENV`].
pub fn api_key_from_lookup<F>(lookup: F) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    non_blank(lookup(API_KEY_ENV))
        .or_else(|| non_blank(lookup(API_KEY_FALLBACK_ENV)))
        .ok_or_else(|| {
            AppError::config_error(format!(
                "{API_KEY_ENV} environment variable not set (or set {API_KEY_FALLBACK_ENV})"
            ))
        })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn normalize_model(model: &str) -> String {
    let model = model.trim();
    model.strip_prefix("models/").unwrap_or(model).to_string()
}
