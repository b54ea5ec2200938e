//! Request and response types for the HTTP surface

pub mod chat;
pub mod error;
pub mod json;

pub use chat::{ChatRequest, ChatResponse, MessageField};
pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
pub use json::Json;
