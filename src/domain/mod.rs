pub mod configuration;
pub mod error;
pub mod generation;
pub mod profile;
pub mod prompt;
pub mod submission;

pub use configuration::GenerationApiConfig;
pub use error::AppError;
pub use generation::{
    GeneratedPlan, GenerationError, GenerationErrorKind, GenerationResult, SAMPLING_TEMPERATURE,
    TokenUsage,
};
pub use profile::{
    ActivityLevel, DietType, FieldIssue, Gender, Goal, IssueKind, MealsPerDay, Profile,
    ProfileField, ProfileOption, RawProfile, ValidationError, validate,
};
pub use prompt::{PromptContext, PromptError, PromptRenderer, RenderedPrompt};
pub use submission::{Submission, SubmissionPhase};
