use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::chat;
use super::cors::cors_layer;
use super::health;
use super::state::AppState;
use super::types::ApiError;
use crate::config::CorsConfig;

/// Create the router with all routes, CORS and request tracing
pub fn create_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
        .route("/api/chat", post(chat::chat))
        .fallback(not_found)
        .with_state(state)
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path()))
}
