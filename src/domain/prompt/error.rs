use thiserror::Error;

/// Failure to compile or render the prompt template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    /// The template could not be parsed or rendered.
    #[error("Failed to render template {template}: {reason}")]
    TemplateRender { template: String, reason: String },

    /// Placeholders in the template do not match the profile fields.
    #[error(
        "Template {template} placeholders do not match the profile fields (missing: [{}], unexpected: [{}])",
        .missing.join(", "),
        .unexpected.join(", ")
    )]
    PlaceholderMismatch { template: String, missing: Vec<String>, unexpected: Vec<String> },
}
