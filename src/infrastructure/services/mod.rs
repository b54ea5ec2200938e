//! Application services

mod chat_service;

pub use chat_service::{ChatReply, ChatService, ReplyRoute, DEFAULT_TOP_K};
