use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::identity::UserId;
use crate::models::profile::ProfileRow;
use crate::profile::{get_profile, upsert_profile, ProfileUpsert};
use crate::state::AppState;

/// GET /api/v1/profile
///
/// `null` when the user has no profile yet — absence is not an error here.
pub async fn handle_get_profile(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> Result<Json<Option<ProfileRow>>, AppError> {
    let profile = get_profile(&state.db, user_id).await?;
    Ok(Json(profile))
}

#[derive(Debug, Serialize)]
pub struct UpsertResponse {
    pub profile_id: i64,
}

/// PUT /api/v1/profile
pub async fn handle_upsert_profile(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Json(req): Json<ProfileUpsert>,
) -> Result<Json<UpsertResponse>, AppError> {
    let profile_id = upsert_profile(&state.db, user_id, &req).await?;
    Ok(Json(UpsertResponse { profile_id }))
}
