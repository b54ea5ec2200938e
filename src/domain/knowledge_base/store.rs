//! Chunk store loaded once at start-up and shared read-only afterwards

use std::fmt;
use std::path::PathBuf;

/// Separator between chunks in the knowledge base document
pub const CHUNK_SEPARATOR: &str = "\n---\n";

/// Chunks served when the knowledge base document cannot be used
pub const FALLBACK_CHUNKS: [&str; 3] = [
    "Minhajul Bhuiyan is a Full-Stack Developer and Software Engineer studying at Islamic University of Technology.",
    "He has experience in React, TypeScript, Python, AI/ML, and modern web development.",
    "His portfolio includes projects in web development, mobile apps, AI systems, and game development.",
];

/// Where the chunks of a knowledge base came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KnowledgeSource {
    File { path: PathBuf },
    Fallback,
    Inline,
}

impl fmt::Display for KnowledgeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File { path } => write!(f, "file:{}", path.display()),
            Self::Fallback => write!(f, "fallback"),
            Self::Inline => write!(f, "inline"),
        }
    }
}

/// Ordered, immutable list of knowledge chunks
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    chunks: Vec<String>,
    source: KnowledgeSource,
}

impl KnowledgeBase {
    /// Split a document into chunks, dropping blank segments
    pub fn from_document(text: &str) -> Self {
        let chunks = text
            .split(CHUNK_SEPARATOR)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            chunks,
            source: KnowledgeSource::Inline,
        }
    }

    /// Knowledge base built from the fixed fallback chunks
    pub fn fallback() -> Self {
        Self {
            chunks: FALLBACK_CHUNKS.iter().map(|c| c.to_string()).collect(),
            source: KnowledgeSource::Fallback,
        }
    }

    /// Build directly from already-split chunks
    pub fn with_chunks<I, S>(chunks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            chunks: chunks.into_iter().map(Into::into).collect(),
            source: KnowledgeSource::Inline,
        }
    }

    pub fn with_source(mut self, source: KnowledgeSource) -> Self {
        self.source = source;
        self
    }

    pub fn chunks(&self) -> &[String] {
        &self.chunks
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    pub fn source(&self) -> &KnowledgeSource {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_document_splits_on_separator() {
        let kb = KnowledgeBase::from_document("First chunk\n---\nSecond chunk\n---\nThird chunk");

        assert_eq!(kb.len(), 3);
        assert_eq!(kb.chunks()[0], "First chunk");
        assert_eq!(kb.chunks()[2], "Third chunk");
    }

    #[test]
    fn test_from_document_trims_and_drops_empty_segments() {
        let kb = KnowledgeBase::from_document("\n  Alpha  \n---\n   \n---\n\n---\nBeta\n");

        assert_eq!(kb.chunks(), &["Alpha".to_string(), "Beta".to_string()]);
    }

    #[test]
    fn test_inline_dashes_are_not_separators() {
        let kb = KnowledgeBase::from_document("uses --- inside a line\n---\nnext");

        assert_eq!(kb.len(), 2);
        assert_eq!(kb.chunks()[0], "uses --- inside a line");
    }

    #[test]
    fn test_empty_document() {
        let kb = KnowledgeBase::from_document("  \n ");
        assert!(kb.is_empty());
    }

    #[test]
    fn test_fallback_has_three_chunks() {
        let kb = KnowledgeBase::fallback();

        assert_eq!(kb.len(), 3);
        assert_eq!(kb.source(), &KnowledgeSource::Fallback);
        assert!(kb.chunks()[0].contains("Full-Stack Developer"));
    }

    #[test]
    fn test_source_display() {
        let source = KnowledgeSource::File {
            path: PathBuf::from("data/minhaj_data.md"),
        };
        assert_eq!(source.to_string(), "file:data/minhaj_data.md");
        assert_eq!(KnowledgeSource::Fallback.to_string(), "fallback");
    }
}
