use std::sync::Arc;
use std::time::Duration;

use super::gemini::GeminiProvider;
use super::http_client::HttpClient;
use crate::config::AppConfig;
use crate::domain::{DomainError, GenerationProvider};

/// Build the Gemini provider from configuration.
///
/// Fails when no API key is configured.
pub fn create_generation_provider(
    config: &AppConfig,
) -> Result<Arc<dyn GenerationProvider>, DomainError> {
    let api_key = config.require_api_key()?;
    let settings = &config.generation;

    let http_client = HttpClient::with_timeout(Duration::from_secs(settings.timeout_secs))?;

    let provider = GeminiProvider::with_base_url(http_client, api_key, &settings.base_url)
        .with_model(&settings.model)
        .with_config(settings.generation_config());

    Ok(Arc::new(provider))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_fails() {
        let config = AppConfig::default();

        let result = create_generation_provider(&config);
        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[test]
    fn test_creates_gemini_provider() {
        let mut config = AppConfig::default();
        config.generation.api_key = Some("test-key".to_string());

        let provider = create_generation_provider(&config).unwrap();
        assert_eq!(provider.provider_name(), "gemini");
    }
}
