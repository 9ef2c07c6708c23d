use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use super::{
    repo::{self, PresetExercise},
    services::workout_from_preset,
};
use crate::{
    auth::AuthUser,
    error::AppError,
    extract::JsonBody,
    state::AppState,
    workouts::{repo as workout_repo, repo_types::Workout},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletePresetRequest {
    pub preset_id: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct CompletePresetResponse {
    pub success: bool,
    pub workout: Workout,
}

pub fn preset_routes() -> Router<AppState> {
    Router::new()
        .route("/presets", get(list_presets))
        .route("/presets/complete", post(complete_preset))
}

#[instrument(skip(state))]
pub async fn list_presets(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<Vec<PresetExercise>>, AppError> {
    Ok(Json(repo::list_all(&state.db).await?))
}

#[instrument(skip(state, payload))]
pub async fn complete_preset(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(payload): JsonBody<CompletePresetRequest>,
) -> Result<Json<CompletePresetResponse>, AppError> {
    let preset_id = payload
        .preset_id
        .ok_or_else(|| AppError::Validation("presetId is required".into()))?;

    let Some(preset) = repo::find_by_id(&state.db, preset_id).await? else {
        warn!(user_id = %user.user_id, preset_id, "unknown preset");
        return Err(AppError::NotFound("preset not found".into()));
    };

    let workout = workout_repo::insert(&state.db, user.user_id, &workout_from_preset(&preset)).await?;

    info!(
        user_id = %user.user_id,
        username = %user.username,
        preset_id,
        workout_id = %workout.id,
        "preset completed"
    );
    Ok(Json(CompletePresetResponse {
        success: true,
        workout,
    }))
}
