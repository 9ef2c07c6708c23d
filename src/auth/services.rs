use tracing::{error, warn};

use crate::{error::AppError, utils::required};

use super::{
    dto::{LoginRequest, RegisterRequest},
    password::verify_password,
    repo_types::User,
};

pub const INVALID_CREDENTIALS: &str = "invalid credentials";

/// Well-formed Argon2id hash (default params) that matches no password.
/// Verified against when the username is unknown so both failure paths
/// cost one Argon2 run.
const DUMMY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";

/// Registration input once every required field is known to be present.
#[derive(Debug, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
}

pub fn validate_registration(req: RegisterRequest) -> Result<NewUser, AppError> {
    let missing = || AppError::Validation("username, email and password are required".into());
    let username = required(req.username).ok_or_else(missing)?;
    let email = required(req.email).ok_or_else(missing)?;
    // Passwords are taken verbatim; only emptiness is rejected.
    let password = req
        .password
        .filter(|p| !p.is_empty())
        .ok_or_else(missing)?;
    Ok(NewUser {
        username,
        email,
        password,
        display_name: required(req.display_name),
    })
}

pub fn validate_login(req: LoginRequest) -> Result<(String, String), AppError> {
    let missing = || AppError::Validation("username and password are required".into());
    let username = required(req.username).ok_or_else(missing)?;
    let password = req.password.filter(|p| !p.is_empty()).ok_or_else(missing)?;
    Ok((username, password))
}

/// Unknown user and wrong password end in the same `Unauthorized`.
pub fn check_credentials<'a>(
    user: Option<&'a User>,
    password: &str,
) -> Result<&'a User, AppError> {
    let hash = user.map_or(DUMMY_HASH, |u| u.password_hash.as_str());
    let ok = verify_password(password, hash).map_err(|e| {
        error!(error = %e, user_id = ?user.map(|u| u.id), "verify_password failed");
        AppError::Internal(e)
    })?;

    match user {
        Some(u) if ok => Ok(u),
        Some(u) => {
            warn!(user_id = %u.id, "login invalid password");
            Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()))
        }
        None => {
            warn!("login unknown username");
            Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()))
        }
    }
}
