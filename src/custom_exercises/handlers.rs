use axum::{extract::State, routing::get, Json, Router};
use tracing::{info, instrument};

use super::{
    dto::CreateCustomExerciseRequest,
    repo::{self, CustomExercise, NewCustomExercise},
};
use crate::{auth::AuthUser, error::AppError, extract::JsonBody, state::AppState};

pub fn custom_exercise_routes() -> Router<AppState> {
    Router::new().route(
        "/customexercise",
        get(list_custom_exercises).post(create_custom_exercise),
    )
}

#[instrument(skip(state))]
pub async fn list_custom_exercises(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<CustomExercise>>, AppError> {
    Ok(Json(repo::list_by_user(&state.db, user.user_id).await?))
}

#[instrument(skip(state, payload))]
pub async fn create_custom_exercise(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(payload): JsonBody<CreateCustomExerciseRequest>,
) -> Result<Json<CustomExercise>, AppError> {
    let new = NewCustomExercise::try_from(payload)?;
    let row = repo::insert(&state.db, user.user_id, &new).await?;
    info!(user_id = %user.user_id, exercise_id = %row.id, "custom exercise created");
    Ok(Json(row))
}
