//! Chat service - shortcut rules, retrieval, prompt assembly and generation
//!
//! `respond` never fails: every error below it collapses into a fixed
//! fallback reply.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::{debug, error, info, warn};

use crate::domain::chat::{INTERNAL_FALLBACK, UPSTREAM_FALLBACK};
use crate::domain::{
    GenerationError, GenerationProvider, KeywordScorer, KnowledgeBase, PromptAssembler,
    ShortcutRules,
};

pub const DEFAULT_TOP_K: usize = 3;

/// Which path produced a reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyRoute {
    /// A shortcut rule answered; retrieval and generation were skipped
    Shortcut { rule: String },
    /// The generation API answered using this many retrieved chunks
    Generated { context_chunks: usize },
    /// Generation failed and a fallback text was returned
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub text: String,
    pub route: ReplyRoute,
}

impl ChatReply {
    fn shortcut(rule: &str, text: &str) -> Self {
        Self {
            text: text.to_string(),
            route: ReplyRoute::Shortcut {
                rule: rule.to_string(),
            },
        }
    }

    fn fallback(text: &str) -> Self {
        Self {
            text: text.to_string(),
            route: ReplyRoute::Fallback,
        }
    }
}

/// Answers chat messages from the knowledge base
pub struct ChatService {
    knowledge_base: Arc<KnowledgeBase>,
    provider: Arc<dyn GenerationProvider>,
    scorer: KeywordScorer,
    assembler: PromptAssembler,
    rules: ShortcutRules,
    top_k: usize,
}

impl std::fmt::Debug for ChatService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatService")
            .field("chunks", &self.knowledge_base.len())
            .field("provider", &self.provider.provider_name())
            .field("top_k", &self.top_k)
            .finish()
    }
}

impl ChatService {
    pub fn new(knowledge_base: Arc<KnowledgeBase>, provider: Arc<dyn GenerationProvider>) -> Self {
        Self {
            knowledge_base,
            provider,
            scorer: KeywordScorer::default(),
            assembler: PromptAssembler::default(),
            rules: ShortcutRules::default(),
            top_k: DEFAULT_TOP_K,
        }
    }

    pub fn with_scorer(mut self, scorer: KeywordScorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn with_assembler(mut self, assembler: PromptAssembler) -> Self {
        self.assembler = assembler;
        self
    }

    pub fn with_rules(mut self, rules: ShortcutRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    /// Answer a message. Always produces a reply.
    pub async fn respond(&self, message: &str) -> ChatReply {
        if let Some(rule) = self.rules.find(message) {
            debug!(rule = %rule.name, "Answered by shortcut rule");
            return ChatReply::shortcut(&rule.name, &rule.response);
        }

        let message = message.trim();

        match AssertUnwindSafe(self.generate_answer(message))
            .catch_unwind()
            .await
        {
            Ok(Ok((text, context_chunks))) => {
                info!(context_chunks, "Generated chat reply");
                ChatReply {
                    text,
                    route: ReplyRoute::Generated { context_chunks },
                }
            }
            Ok(Err(e @ GenerationError::UpstreamFailure { .. })) => {
                warn!(error = %e, provider = self.provider.provider_name(), "Generation API rejected request");
                ChatReply::fallback(UPSTREAM_FALLBACK)
            }
            Ok(Err(e)) => {
                error!(error = %e, provider = self.provider.provider_name(), "Generation request failed");
                ChatReply::fallback(INTERNAL_FALLBACK)
            }
            Err(_) => {
                error!("Unexpected panic while answering chat message");
                ChatReply::fallback(INTERNAL_FALLBACK)
            }
        }
    }

    /// Retrieve context, build the prompt and call the provider.
    ///
    /// Returns the generated text and the number of chunks used as context.
    pub async fn generate_answer(&self, message: &str) -> Result<(String, usize), GenerationError> {
        let chunks = self
            .scorer
            .search(message, self.knowledge_base.chunks(), self.top_k);

        debug!(retrieved = chunks.len(), top_k = self.top_k, "Retrieved context chunks");

        let prompt = self.assembler.build(message, &chunks);
        let text = self.provider.generate(&prompt).await?;

        Ok((text, chunks.len()))
    }
}
