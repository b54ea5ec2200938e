//! PRAXIS portfolio assistant
//!
//! Answers visitor questions about Minhajul's portfolio. Messages are matched
//! against shortcut rules first; otherwise the most relevant knowledge base
//! chunks are retrieved by keyword scoring and sent with a persona prompt to
//! the Gemini generation API.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
