use axum::{Json, extract::State};
use std::sync::Arc;

use crate::AppState;
use crate::services::LLMProviderInfo;

// Active AI provider and whether it can currently make calls
#[utoipa::path(
    get,
    path = "/api/ai/status",
    responses(
        (status = 200, description = "Provider name, model and credential presence", body = LLMProviderInfo)
    ),
    tag = "System"
)]
pub async fn get_ai_status(State(state): State<Arc<AppState>>) -> Json<LLMProviderInfo> {
    Json(state.advisor.provider_info())
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn ready_check() -> &'static str {
    "READY"
}
