use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use super::http_client::HttpClientTrait;
use crate::domain::{GenerationConfig, GenerationError, GenerationProvider};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash-latest";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Google Gemini `generateContent` provider
#[derive(Debug)]
pub struct GeminiProvider<C: HttpClientTrait> {
    client: C,
    api_key: String,
    base_url: String,
    model: String,
    config: GenerationConfig,
}

impl<C: HttpClientTrait> GeminiProvider<C> {
    pub fn new(client: C, api_key: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, DEFAULT_GEMINI_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            config: GenerationConfig::default(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_config(mut self, config: GenerationConfig) -> Self {
        self.config = config;
        self
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    fn build_request(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }],
            "generationConfig": self.config,
        })
    }

    /// The key travels in a header so it never appears in URLs or error text
    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("Content-Type", "application/json"),
            (API_KEY_HEADER, self.api_key.as_str()),
        ]
    }

    fn parse_response(&self, body: &str) -> Result<String, GenerationError> {
        let response: GeminiResponse = serde_json::from_str(body).map_err(|e| {
            GenerationError::transport(format!("Failed to parse Gemini response: {}", e))
        })?;

        response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .ok_or_else(|| GenerationError::transport("Gemini response contained no candidate text"))
    }
}

#[async_trait]
impl<C: HttpClientTrait> GenerationProvider for GeminiProvider<C> {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = self.generate_url();
        let body = self.build_request(prompt);

        debug!(model = %self.model, prompt_len = prompt.len(), "Calling Gemini generateContent");

        let response = self.client.post_json(&url, self.headers(), &body).await?;

        if response.status != 200 {
            error!(
                status = response.status,
                body = %response.body,
                "Gemini API error"
            );
            return Err(GenerationError::upstream(response.status, response.body));
        }

        self.parse_response(&response.body)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

// Gemini API types

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: Option<String>,
}
