//! Liveness endpoints

use axum::extract::State;
use serde::Serialize;

use super::state::AppState;
use crate::api::types::Json;

pub const ROOT_MESSAGE: &str = "Minhajul's Portfolio AI Assistant is running!";

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub knowledge_base_chunks: usize,
}

/// `GET /`
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE,
    })
}

/// `GET /health` - always healthy once serving, even on fallback data
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HealthStatus::Healthy,
        knowledge_base_chunks: state.knowledge_base().len(),
    })
}
