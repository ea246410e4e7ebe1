use crate::domain::{GeneratedPlan, GenerationError, GenerationResult, RenderedPrompt};
use crate::ports::GenerationClient;
use std::sync::{Arc, Mutex};

/// Records prompts and answers with a canned result.
#[derive(Clone)]
pub struct FakeGenerationClient {
    pub received_prompts: Arc<Mutex<Vec<String>>>,
    pub response: Result<String, GenerationError>,
}

impl FakeGenerationClient {
    pub fn replying(text: impl Into<String>) -> Self {
        Self { received_prompts: Arc::new(Mutex::new(vec![])), response: Ok(text.into()) }
    }

    pub fn failing(error: GenerationError) -> Self {
        Self { received_prompts: Arc::new(Mutex::new(vec![])), response: Err(error) }
    }

    pub fn get_received_prompts(&self) -> Vec<String> {
        self.received_prompts.lock().unwrap().clone()
    }
}

impl GenerationClient for FakeGenerationClient {
    fn generate(&self, prompt: &RenderedPrompt) -> GenerationResult {
        self.received_prompts.lock().unwrap().push(prompt.as_str().to_string());
        self.response.clone().map(|text| GeneratedPlan {
            text,
            model: "fake-model".to_string(),
            finish_reason: Some("STOP".to_string()),
            usage: None,
        })
    }

    fn model(&self) -> &str {
        "fake-model"
    }
}
