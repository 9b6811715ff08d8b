mod dto;
mod handlers;
mod repo;

use axum::{
    routing::{get, put},
    Router,
};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pantry", get(handlers::list_pantry).post(handlers::add_item))
        .route(
            "/pantry/:id",
            put(handlers::update_item).delete(handlers::delete_item),
        )
}
