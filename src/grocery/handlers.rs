use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::{aggregate, dto::GrocerySection, repo};
use crate::auth::Session;
use crate::error::ApiError;
use crate::state::AppState;

/// The user's grocery list: one section per cooked meal. Check state lives
/// with the consumer and starts empty on every fetch.
#[instrument(skip(state))]
pub async fn grocery_list(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<Vec<GrocerySection>>, ApiError> {
    let rows = repo::list_by_user(&state.db, session.user_id).await?;
    Ok(Json(aggregate::load(&rows)))
}

/// Deleting is idempotent: removing an id that is already gone still
/// answers 204, matching the consumer's optimistic local `remove`.
#[instrument(skip(state))]
pub async fn remove_meal(
    State(state): State<AppState>,
    session: Session,
    Path(meal_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let deleted = repo::delete_by_meal(&state.db, session.user_id, meal_id).await?;
    if deleted == 0 {
        warn!(%meal_id, "delete of unknown cooked meal");
    } else {
        info!(%meal_id, "cooked meal removed");
    }
    Ok(StatusCode::NO_CONTENT)
}
