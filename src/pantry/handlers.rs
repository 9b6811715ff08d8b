use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument};
use uuid::Uuid;

use super::dto::{parse_date, NewPantryItem, PantryItem, UpdatePantryItem};
use super::repo;
use crate::auth::Session;
use crate::error::ApiError;
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn list_pantry(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Vec<PantryItem>>, ApiError> {
    let rows = repo::list_by_user(&state.db, session.user_id).await?;
    Ok(Json(rows.into_iter().map(PantryItem::from).collect()))
}

#[instrument(skip(state))]
pub async fn add_item(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<NewPantryItem>,
) -> Result<(StatusCode, Json<PantryItem>), ApiError> {
    if body.ingredient_name.trim().is_empty() {
        return Err(ApiError::Precondition("ingredient_name is required"));
    }
    let expiry = body.expiry_date.as_deref().map(parse_date).transpose()?;

    let row = repo::insert(
        &state.db,
        session.user_id,
        body.ingredient_name.trim(),
        body.quantity,
        &body.unit,
        expiry,
        &body.storage_location,
    )
    .await?;

    info!(pantry_id = %row.pantry_id, "pantry item added");
    Ok((StatusCode::CREATED, Json(row.into())))
}

#[instrument(skip(state))]
pub async fn update_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdatePantryItem>,
) -> Result<Json<PantryItem>, ApiError> {
    let expiry = body.expiry_date.as_deref().map(parse_date).transpose()?;

    let row = repo::update(
        &state.db,
        session.user_id,
        id,
        body.quantity,
        body.unit.as_deref(),
        expiry,
        body.storage_location.as_deref(),
    )
    .await?
    .ok_or(ApiError::Precondition("no pantry item with that id"))?;

    Ok(Json(row.into()))
}

#[instrument(skip(state))]
pub async fn delete_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = repo::delete(&state.db, session.user_id, id).await?;
    if deleted > 0 {
        info!(pantry_id = %id, "pantry item deleted");
    }
    Ok(StatusCode::NO_CONTENT)
}
