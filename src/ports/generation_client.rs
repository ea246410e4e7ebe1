//! Text-generation port definition.

use crate::domain::{GenerationResult, RenderedPrompt};

/// Port for a remote text-generation service.
///
/// Implementations make exactly one request per call and report every failure
/// through the returned [`GenerationResult`].
pub trait GenerationClient {
    /// Send the prompt and return the generated text or a failure descriptor.
    fn generate(&self, prompt: &RenderedPrompt) -> GenerationResult;

    /// Identifier of the model requests are sent to.
    fn model(&self) -> &str;
}
