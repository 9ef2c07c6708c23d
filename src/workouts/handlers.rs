use axum::{extract::State, routing::get, Json, Router};
use tracing::{info, instrument};

use super::{
    dto::CreateWorkoutRequest,
    repo,
    repo_types::{NewWorkout, Workout},
};
use crate::{auth::AuthUser, error::AppError, extract::JsonBody, state::AppState};

pub fn workout_routes() -> Router<AppState> {
    Router::new().route("/workout", get(list_workouts).post(create_workout))
}

#[instrument(skip(state))]
pub async fn list_workouts(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<Workout>>, AppError> {
    Ok(Json(repo::list_by_user(&state.db, user.user_id).await?))
}

#[instrument(skip(state, payload))]
pub async fn create_workout(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(payload): JsonBody<CreateWorkoutRequest>,
) -> Result<Json<Workout>, AppError> {
    let new = NewWorkout::try_from(payload)?;
    let workout = repo::insert(&state.db, user.user_id, &new).await?;
    info!(
        user_id = %user.user_id,
        username = %user.username,
        workout_id = %workout.id,
        "workout logged"
    );
    Ok(Json(workout))
}
