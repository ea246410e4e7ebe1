pub mod context;
pub mod error;
pub mod renderer;

pub use context::PromptContext;
pub use error::PromptError;
pub use renderer::{PromptRenderer, RenderedPrompt};
