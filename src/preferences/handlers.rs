use axum::{extract::State, Json};
use tracing::{info, instrument};

use super::dto::Preferences;
use super::repo;
use crate::auth::Session;
use crate::error::ApiError;
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn get_preferences(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Preferences>, ApiError> {
    let prefs = repo::get_by_user(&state.db, session.user_id)
        .await?
        .map(Preferences::from)
        .unwrap_or_default();
    Ok(Json(prefs))
}

#[instrument(skip(state))]
pub async fn put_preferences(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<Preferences>,
) -> Result<Json<Preferences>, ApiError> {
    let row = repo::upsert(&state.db, session.user_id, &body).await?;
    info!("preferences saved");
    Ok(Json(row.into()))
}
