use async_trait::async_trait;
use std::fmt::Debug;

use super::GenerationError;

/// Trait for text generation backends (Gemini, test doubles)
#[async_trait]
pub trait GenerationProvider: Send + Sync + Debug {
    /// Generate a completion for a single prompt
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Get the provider name
    fn provider_name(&self) -> &'static str;
}
