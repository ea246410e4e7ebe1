use crate::domain::{PromptError, PromptRenderer};

pub const DIET_PLAN_TEMPLATE_NAME: &str = "diet_plan.j2";

static DIET_PLAN_TEMPLATE: &str = include_str!("../assets/prompts/diet_plan.j2");

/// Renderer over the embedded diet plan template.
pub fn diet_plan_renderer() -> Result<PromptRenderer, PromptError> {
    PromptRenderer::new(DIET_PLAN_TEMPLATE_NAME, DIET_PLAN_TEMPLATE)
}
