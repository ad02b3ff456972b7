use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::identity::UserId;
use crate::recommend::prompts::build_chat_system;
use crate::recommend::{generate_recommendations, ChatContext, RecommendationResult};
use crate::state::AppState;

/// POST /api/v1/recommendations
pub async fn handle_generate(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> Result<Json<RecommendationResult>, AppError> {
    let result = generate_recommendations(&state.db, state.narrator.as_ref(), user_id).await?;
    Ok(Json(result))
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub context: Option<ChatContext>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// POST /api/v1/chat
///
/// Stateless single turn — the transcript lives in the client only.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if req.message.trim().is_empty() {
        return Err(AppError::Validation("message must not be empty".to_string()));
    }

    let system = build_chat_system(req.context.as_ref());
    let reply = state.narrator.chat(&system, &req.message).await?;
    Ok(Json(ChatResponse { reply }))
}
