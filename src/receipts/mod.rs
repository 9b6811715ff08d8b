mod handlers;
mod services;

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/parse-receipt/", post(handlers::upload_receipt))
        .layer(DefaultBodyLimit::max(20 * 1024 * 1024)) // 20MB
}
