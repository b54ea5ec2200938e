//! Keyword retrieval over knowledge base chunks

mod scorer;

pub use scorer::{KeywordScorer, ScoredChunk, ScoringWeights, DEFAULT_KEY_TERMS, DEFAULT_PHRASE_BONUS};
