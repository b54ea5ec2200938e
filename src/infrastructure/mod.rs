//! Infrastructure layer - document loading, generation clients, services and logging

pub mod knowledge_base;
pub mod llm;
pub mod logging;
pub mod services;
