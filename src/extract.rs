use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` whose rejection renders as an `AppError` (400 with a JSON
/// body) instead of axum's plain-text 400/415/422.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
