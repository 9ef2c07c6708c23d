use axum::{
    extract::{FromRef, State},
    routing::post,
    Json, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
        jwt::JwtKeys,
        password::hash_password,
        repo_types::User,
        services::{check_credentials, validate_login, validate_registration},
    },
    error::AppError,
    extract::JsonBody,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<RegisterRequest>,
) -> Result<Json<RegisterResponse>, AppError> {
    let new_user = validate_registration(payload)?;

    let hash = hash_password(&new_user.password)?;

    let user = User::create(
        &state.db,
        &new_user.username,
        &new_user.email,
        &hash,
        new_user.display_name.as_deref(),
    )
    .await
    .map_err(|e| {
        let err = AppError::from_insert(e);
        if matches!(err, AppError::Conflict) {
            warn!(username = %new_user.username, "registration conflict");
        }
        err
    })?;

    info!(user_id = %user.id, username = %user.username, "user registered");
    Ok(Json(RegisterResponse {
        success: true,
        user: user.into(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let (username, password) = validate_login(payload)?;

    let found = User::find_by_username(&state.db, &username).await?;
    let user = check_credentials(found.as_ref(), &password)?;

    let token = JwtKeys::from_ref(&state).sign(user.id, &user.username)?;

    info!(user_id = %user.id, "user logged in");
    Ok(Json(LoginResponse {
        token,
        username: user.username.clone(),
        display_name: user.display_name.clone(),
    }))
}
