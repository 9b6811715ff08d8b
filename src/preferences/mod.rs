mod dto;
mod handlers;
mod repo;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/preferences",
        get(handlers::get_preferences).put(handlers::put_preferences),
    )
}
