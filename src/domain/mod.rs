//! Domain layer - Core business logic and entities

pub mod chat;
pub mod error;
pub mod knowledge_base;
pub mod llm;
pub mod prompt;
pub mod retrieval;

pub use chat::{Matcher, ShortcutRule, ShortcutRules};
pub use error::DomainError;
pub use knowledge_base::{KnowledgeBase, KnowledgeSource};
pub use llm::{GenerationConfig, GenerationError, GenerationProvider};
pub use prompt::{build_prompt, PromptAssembler};
pub use retrieval::{KeywordScorer, ScoredChunk, ScoringWeights};
