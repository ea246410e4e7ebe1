//! Render the prompt for a profile without contacting the endpoint.

use crate::domain::{AppError, PromptRenderer, RawProfile, RenderedPrompt, validate};

pub fn execute(renderer: &PromptRenderer, raw: &RawProfile) -> Result<RenderedPrompt, AppError> {
    let profile = validate(raw)?;
    Ok(renderer.render(&profile)?)
}
