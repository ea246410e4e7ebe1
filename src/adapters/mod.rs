pub mod embedded_prompt_templates;
pub mod gemini_client_http;

pub use embedded_prompt_templates::diet_plan_renderer;
pub use gemini_client_http::HttpGenerationClient;
