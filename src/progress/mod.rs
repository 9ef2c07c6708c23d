use crate::state::AppState;
use axum::Router;

mod handlers;
mod repo;
mod services;

pub fn router() -> Router<AppState> {
    handlers::progress_routes()
}
