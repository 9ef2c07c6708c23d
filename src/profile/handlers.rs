use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use tracing::{info, instrument};

use super::{dto::ProfilePatch, repo, repo_types::ProfileView, services::merge_profile};
use crate::{
    auth::AuthUser, error::AppError, extract::JsonBody, state::AppState, utils::required,
};

pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile).put(update_profile))
}

#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<ProfileView>, AppError> {
    repo::get_view(&state.db, user.user_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("user not found".into()))
}

/// Merges the patch into the stored profile and, when the merged record has
/// both measurements, appends a BMI history row. Email goes to the user
/// record. All writes share one transaction.
#[instrument(skip(state, patch))]
pub async fn update_profile(
    State(state): State<AppState>,
    user: AuthUser,
    JsonBody(patch): JsonBody<ProfilePatch>,
) -> Result<Json<Value>, AppError> {
    let mut tx = state.db.begin().await?;

    if let Some(email) = required(patch.email.clone()) {
        repo::update_email_tx(&mut tx, user.user_id, &email)
            .await
            .map_err(AppError::from_insert)?;
    }

    let current = repo::find_for_update_tx(&mut tx, user.user_id).await?;
    let merged = merge_profile(current, &patch);
    repo::upsert_tx(&mut tx, user.user_id, &merged).await?;

    let bmi = merged.bmi();
    if let Some(bmi) = bmi {
        repo::insert_bmi_tx(&mut tx, user.user_id, bmi).await?;
    }

    tx.commit().await?;

    info!(user_id = %user.user_id, ?bmi, "profile updated");
    Ok(Json(json!({ "success": true })))
}
