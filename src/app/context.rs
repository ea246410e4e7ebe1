use crate::domain::PromptRenderer;
use crate::ports::GenerationClient;

/// Application context holding the collaborators a submission needs.
///
/// Built once before the first submission and only read afterwards.
pub struct AppContext<G: GenerationClient> {
    renderer: PromptRenderer,
    client: G,
}

impl<G: GenerationClient> AppContext<G> {
    /// Create a new application context.
    pub fn new(renderer: PromptRenderer, client: G) -> Self {
        Self { renderer, client }
    }

    /// Get a reference to the prompt renderer.
    pub fn renderer(&self) -> &PromptRenderer {
        &self.renderer
    }

    /// Get a reference to the generation client.
    pub fn client(&self) -> &G {
        &self.client
    }
}
