//! Shared state handed to every handler

use std::sync::Arc;

use crate::domain::KnowledgeBase;
use crate::infrastructure::services::ChatService;

/// Read-only after start-up
#[derive(Clone, Debug)]
pub struct AppState {
    pub chat_service: Arc<ChatService>,
}

impl AppState {
    pub fn new(chat_service: ChatService) -> Self {
        Self {
            chat_service: Arc::new(chat_service),
        }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        self.chat_service.knowledge_base()
    }
}
