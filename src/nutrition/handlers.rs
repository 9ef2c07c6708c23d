use axum::{extract::State, routing::get, Json, Router};
use tracing::{info, instrument};

use super::{
    dto::CreateNutritionRequest,
    repo::{self, NewNutritionEntry, NutritionEntry},
};
use crate::{auth::AuthUser, error::AppError, extract::JsonBody, state::AppState};

pub fn nutrition_routes() -> Router<AppState> {
    Router::new().route("/nutrition", get(list_meals).post(log_meal))
}

#[instrument(skip(state))]
pub async fn list_meals(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<NutritionEntry>>, AppError> {
    Ok(Json(repo::list_by_user(&state.db, user.user_id).await?))
}

#[instrument(skip(state, payload))]
pub async fn log_meal(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(payload): JsonBody<CreateNutritionRequest>,
) -> Result<Json<NutritionEntry>, AppError> {
    let entry = NewNutritionEntry::try_from(payload)?;
    let row = repo::insert(&state.db, user.user_id, &entry).await?;
    info!(user_id = %user.user_id, entry_id = %row.id, "meal logged");
    Ok(Json(row))
}
