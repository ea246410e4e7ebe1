mod fake_generation_client;

pub use fake_generation_client::FakeGenerationClient;

use crate::adapters::embedded_prompt_templates::diet_plan_renderer;
use crate::domain::{RawProfile, RenderedPrompt, validate};

/// Prompt rendered from the form defaults.
pub fn sample_prompt() -> RenderedPrompt {
    let profile = validate(&RawProfile::default()).unwrap();
    diet_plan_renderer().unwrap().render(&profile).unwrap()
}
