//! Layered application configuration

mod app_config;

pub use app_config::{
    AppConfig, CorsConfig, GenerationSettings, KnowledgeBaseConfig, LogFormat, LoggingConfig,
    RetrievalConfig, ServerConfig, API_KEY_ENV, PORT_ENV,
};
