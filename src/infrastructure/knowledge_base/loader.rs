//! Knowledge base loading with fallback
//!
//! A missing or unreadable document never stops the service: the fixed
//! fallback chunks are used instead.

use std::io::ErrorKind;
use std::path::Path;

use tracing::{info, warn};

use crate::domain::{DomainError, KnowledgeBase, KnowledgeSource};

/// Read and split the document at `path`
pub async fn read_knowledge_base(path: &Path) -> Result<KnowledgeBase, DomainError> {
    let text = tokio::fs::read_to_string(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => {
            DomainError::knowledge_base(format!("file not found: {}", path.display()))
        }
        _ => DomainError::knowledge_base(format!("failed to read {}: {}", path.display(), e)),
    })?;

    let kb = KnowledgeBase::from_document(&text).with_source(KnowledgeSource::File {
        path: path.to_path_buf(),
    });

    if kb.is_empty() {
        return Err(DomainError::knowledge_base(format!(
            "no chunks found in {}",
            path.display()
        )));
    }

    Ok(kb)
}

/// Load the knowledge base, substituting the fallback chunks on any error
pub async fn load_knowledge_base(path: impl AsRef<Path>) -> KnowledgeBase {
    let path = path.as_ref();

    match read_knowledge_base(path).await {
        Ok(kb) => {
            info!(
                path = %path.display(),
                chunks = kb.len(),
                "Knowledge base loaded successfully"
            );
            kb
        }
        Err(e) => {
            let kb = KnowledgeBase::fallback();
            warn!(
                error = %e,
                chunks = kb.len(),
                "Knowledge base unavailable, using minimal fallback data"
            );
            kb
        }
    }
}
