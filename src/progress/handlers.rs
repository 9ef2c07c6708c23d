use axum::{extract::State, routing::get, Json, Router};
use tracing::{debug, instrument};

use super::{repo, services::{summarize, ProgressSummary}};
use crate::{auth::AuthUser, error::AppError, state::AppState};

pub fn progress_routes() -> Router<AppState> {
    Router::new().route("/progress", get(weekly_progress))
}

/// Recomputed from the raw rows on every call.
#[instrument(skip(state))]
pub async fn weekly_progress(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<ProgressSummary>, AppError> {
    let rows = repo::last_seven_days(&state.db, user.user_id).await?;
    let summary = summarize(&rows);
    debug!(user_id = %user.user_id, workouts = rows.len(), goal = summary.weekly_goal, "progress computed");
    Ok(Json(summary))
}
