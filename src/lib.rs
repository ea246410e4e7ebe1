//! dietplan: turn a biometric and dietary profile into a personalized diet plan.
//!
//! A submission validates a [`RawProfile`], renders the fixed prompt template
//! and sends it to the Gemini `generateContent` endpoint once.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::HttpGenerationClient;
pub use app::AppContext;
pub use app::api::{
    FieldRule, FieldSummary, PlanReport, connect, connect_with, generate_plan, list_options,
    render_prompt, validate_profile,
};
pub use domain::{
    ActivityLevel, AppError, DietType, FieldIssue, Gender, GeneratedPlan, GenerationApiConfig,
    GenerationError, GenerationErrorKind, Goal, IssueKind, MealsPerDay, Profile, ProfileField,
    ProfileOption, PromptError, RawProfile, RenderedPrompt, TokenUsage, ValidationError,
};
pub use ports::GenerationClient;
