//! One submission: validate, render, request.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::app::AppContext;
use crate::domain::{
    AppError, GeneratedPlan, Profile, RawProfile, RenderedPrompt, Submission, SubmissionPhase,
    validate,
};
use crate::ports::GenerationClient;

/// Everything produced by a successful submission.
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub profile: Profile,
    pub prompt: RenderedPrompt,
    pub plan: GeneratedPlan,
}

/// Run one submission through the pipeline.
///
/// Validation and generation failures come back as recoverable [`AppError`]s;
/// the caller decides how to surface them.
pub fn execute<G: GenerationClient>(
    ctx: &AppContext<G>,
    raw: &RawProfile,
) -> Result<PlanReport, AppError> {
    let mut submission = Submission::new();
    let result = run_submission(ctx, raw, &mut submission);
    submission.finish(result.is_ok());
    result
}

fn run_submission<G: GenerationClient>(
    ctx: &AppContext<G>,
    raw: &RawProfile,
    submission: &mut Submission,
) -> Result<PlanReport, AppError> {
    submission.advance(SubmissionPhase::Validating);
    let profile = validate(raw).inspect_err(|err| {
        debug!(fields = ?err.fields(), "Profile rejected");
    })?;

    submission.advance(SubmissionPhase::Rendering);
    let prompt = ctx.renderer().render(&profile)?;

    submission.advance(SubmissionPhase::Requesting);
    info!(model = ctx.client().model(), "Requesting diet plan");
    let plan = ctx.client().generate(&prompt).inspect_err(|err| {
        warn!(kind = %err.kind, "Diet plan generation failed");
    })?;

    Ok(PlanReport { profile, prompt, plan })
}
