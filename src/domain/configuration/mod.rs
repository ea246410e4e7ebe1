pub mod generation_config;

pub use generation_config::{
    API_KEY_ENV, API_KEY_FALLBACK_ENV, API_URL_ENV, DEFAULT_API_URL, DEFAULT_MODEL,
    GenerationApiConfig, MODEL_ENV, REQUEST_TIMEOUT_SECS, api_key_from_lookup,
};
