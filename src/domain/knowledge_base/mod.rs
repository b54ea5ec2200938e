//! In-memory knowledge base made of text chunks

mod store;

pub use store::{KnowledgeBase, KnowledgeSource, CHUNK_SEPARATOR, FALLBACK_CHUNKS};
