//! Generation provider implementations

mod factory;
mod gemini;
mod http_client;

pub use factory::create_generation_provider;
pub use gemini::{GeminiProvider, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
pub use http_client::{HttpClient, HttpClientTrait, HttpResponse};
