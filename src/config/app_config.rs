use serde::Deserialize;

use crate::domain::retrieval::{DEFAULT_KEY_TERMS, DEFAULT_PHRASE_BONUS};
use crate::domain::{DomainError, GenerationConfig, ScoringWeights};
use crate::infrastructure::llm::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};

/// Environment variable holding the Gemini API key
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Environment variable overriding the listen port
pub const PORT_ENV: &str = "PORT";

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub knowledge_base: KnowledgeBaseConfig,
    pub retrieval: RetrievalConfig,
    pub generation: GenerationSettings,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KnowledgeBaseConfig {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    pub top_k: usize,
    pub phrase_bonus: u32,
    pub key_terms: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Exact origins, or `scheme://*.domain` for any subdomain
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for KnowledgeBaseConfig {
    fn default() -> Self {
        Self {
            path: "./data/minhaj_data.md".to_string(),
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k: 3,
            phrase_bonus: DEFAULT_PHRASE_BONUS,
            key_terms: DEFAULT_KEY_TERMS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        let defaults = GenerationConfig::default();
        Self {
            api_key: None,
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            timeout_secs: 30,
            temperature: defaults.temperature,
            top_k: defaults.top_k,
            top_p: defaults.top_p,
            max_output_tokens: defaults.max_output_tokens,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:5173".to_string(),
                "https://minhajul-bhuiyan.vercel.app".to_string(),
                "https://*.vercel.app".to_string(),
            ],
        }
    }
}

impl RetrievalConfig {
    pub fn weights(&self) -> ScoringWeights {
        ScoringWeights::default()
            .with_phrase_bonus(self.phrase_bonus)
            .with_key_terms(self.key_terms.iter().cloned())
    }
}

impl GenerationSettings {
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            temperature: self.temperature,
            top_k: self.top_k,
            top_p: self.top_p,
            max_output_tokens: self.max_output_tokens,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        Ok(app_config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply the plain `GOOGLE_API_KEY` and `PORT` variables
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let configured = self
            .generation
            .api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty());

        if !configured {
            self.generation.api_key = lookup(API_KEY_ENV);
        }

        if let Some(port) = lookup(PORT_ENV).and_then(|p| p.trim().parse().ok()) {
            self.server.port = port;
        }

        self
    }

    /// The generation API key; start-up must fail without one
    pub fn require_api_key(&self) -> Result<&str, DomainError> {
        self.generation
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                DomainError::configuration(format!(
                    "{} not found. Set it in the environment or a .env file.",
                    API_KEY_ENV
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.server.port, 8000);
        assert_eq!(config.knowledge_base.path, "./data/minhaj_data.md");
        assert_eq!(config.retrieval.top_k, 3);
        assert_eq!(config.generation.timeout_secs, 30);
        assert_eq!(config.generation.model, "gemini-1.5-flash-latest");
        assert_eq!(config.cors.allowed_origins.len(), 4);
    }

    #[test]
    fn test_api_key_from_env() {
        let config = AppConfig::default().with_env_overrides(lookup(&[(API_KEY_ENV, "secret")]));
        assert_eq!(config.require_api_key().unwrap(), "secret");
    }

    #[test]
    fn test_configured_api_key_wins_over_env() {
        let mut config = AppConfig::default();
        config.generation.api_key = Some("from-config".to_string());

        let config = config.with_env_overrides(lookup(&[(API_KEY_ENV, "from-env")]));
        assert_eq!(config.require_api_key().unwrap(), "from-config");
    }

    #[test]
    fn test_blank_configured_api_key_falls_back_to_env() {
        let mut config = AppConfig::default();
        config.generation.api_key = Some("  ".to_string());

        let config = config.with_env_overrides(lookup(&[(API_KEY_ENV, "from-env")]));
        assert_eq!(config.require_api_key().unwrap(), "from-env");
    }

    #[test]
    fn test_missing_api_key_is_configuration_error() {
        let config = AppConfig::default().with_env_overrides(lookup(&[]));

        let err = config.require_api_key().unwrap_err();
        assert!(matches!(err, DomainError::Configuration { .. }));
        assert!(err.to_string().contains(API_KEY_ENV));
    }

    #[test]
    fn test_blank_api_key_rejected() {
        let config = AppConfig::default().with_env_overrides(lookup(&[(API_KEY_ENV, "   ")]));
        assert!(config.require_api_key().is_err());
    }

    #[test]
    fn test_port_override() {
        let config = AppConfig::default().with_env_overrides(lookup(&[(PORT_ENV, "9090")]));
        assert_eq!(config.server.port, 9090);

        let config = AppConfig::default().with_env_overrides(lookup(&[(PORT_ENV, "abc")]));
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn test_retrieval_weights() {
        let retrieval = RetrievalConfig {
            top_k: 5,
            phrase_bonus: 4,
            key_terms: vec!["Rust".to_string()],
        };

        let weights = retrieval.weights();
        assert_eq!(weights.phrase_bonus, 4);
        assert_eq!(weights.key_terms, vec!["rust".to_string()]);
    }

    #[test]
    fn test_generation_config_mapping() {
        let settings = GenerationSettings {
            temperature: 0.2,
            max_output_tokens: 128,
            ..GenerationSettings::default()
        };

        let config = settings.generation_config();
        assert_eq!(config.max_output_tokens, 128);
        assert_eq!(config.top_k, 40);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                "[server]\nport = 9000\n\n[logging]\nformat = \"json\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.retrieval.top_k, 3);
    }
}
