//! Knowledge base document loading

mod loader;

pub use loader::{load_knowledge_base, read_knowledge_base};
