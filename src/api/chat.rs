//! `POST /api/chat`

use axum::extract::State;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use super::state::AppState;
use crate::api::types::{ChatRequest, ChatResponse, Json, MessageField};
use crate::domain::chat::INTERNAL_FALLBACK;
use crate::infrastructure::services::ReplyRoute;

/// Answer a chat message. Failures still produce a 200 with fallback text.
#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let Some(message) = request.text() else {
        if let MessageField::Invalid(value) = &request.message {
            warn!(message = %value, "Chat message is not a string");
        }
        return Json(ChatResponse::new(INTERNAL_FALLBACK));
    };

    debug!(message_len = message.len(), "Chat request received");
    let reply = state.chat_service.respond(message).await;

    match &reply.route {
        ReplyRoute::Shortcut { rule } => info!(%rule, "Chat reply"),
        ReplyRoute::Generated { context_chunks } => info!(context_chunks, "Chat reply"),
        ReplyRoute::Fallback => info!("Chat reply (fallback)"),
    }

    Json(ChatResponse::new(reply.text))
}
