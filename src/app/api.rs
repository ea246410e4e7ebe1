//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use crate::adapters::{HttpGenerationClient, diet_plan_renderer};
use crate::app::{
    AppContext,
    commands::{options, plan, prompt},
};
use crate::ports::GenerationClient;

pub use crate::app::commands::options::{FieldRule, FieldSummary};
pub use crate::app::commands::plan::PlanReport;
pub use crate::domain::{
    AppError, GenerationApiConfig, Profile, RawProfile, RenderedPrompt, ValidationError,
};

/// Check raw field values and build a [`Profile`].
pub fn validate_profile(raw: &RawProfile) -> Result<Profile, ValidationError> {
    crate::domain::validate(raw)
}

/// Render the diet plan prompt for `raw` without contacting the endpoint.
pub fn render_prompt(raw: &RawProfile) -> Result<RenderedPrompt, AppError> {
    let renderer = diet_plan_renderer()?;
    prompt::execute(&renderer, raw)
}

/// Build a context from the process environment.
///
/// Fails with [`AppError::Configuration`] when no API key is set or the
/// endpoint overrides are malformed. Nothing is sent over the network.
pub fn connect() -> Result<AppContext<HttpGenerationClient>, AppError> {
    let client = HttpGenerationClient::from_env()?;
    Ok(AppContext::new(diet_plan_renderer()?, client))
}

/// Build a context from an explicit key and endpoint configuration.
pub fn connect_with(
    api_key: impl Into<String>,
    config: &GenerationApiConfig,
) -> Result<AppContext<HttpGenerationClient>, AppError> {
    let client = HttpGenerationClient::new(api_key.into(), config)?;
    Ok(AppContext::new(diet_plan_renderer()?, client))
}

/// Validate, render and request one diet plan.
pub fn generate_plan<G: GenerationClient>(
    ctx: &AppContext<G>,
    raw: &RawProfile,
) -> Result<PlanReport, AppError> {
    plan::execute(ctx, raw)
}

/// What each profile field accepts, in form order.
pub fn list_options() -> Vec<FieldSummary> {
    options::list()
}
