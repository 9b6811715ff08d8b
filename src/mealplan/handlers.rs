use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, instrument};

use super::cook::CookFlow;
use super::dto::{CookRequest, CookedMealResponse, MealPlan};
use super::{normalize, repo};
use crate::auth::Session;
use crate::error::ApiError;
use crate::state::AppState;

/// Latest plan, normalized. A user without a stored plan (or with an
/// unusable one) gets an empty plan, not an error.
#[instrument(skip(state))]
pub async fn get_meal_plan(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<MealPlan>, ApiError> {
    let raw = repo::latest_plan(&state.db, session.user_id).await?;
    let plan = raw.map(|v| normalize(&v)).unwrap_or_default();
    Ok(Json(plan))
}

/// Promote a (day, slot) selection from the latest plan into a cooked-meal
/// row. The grocery list picks the new row up on its next fetch; this
/// handler does not push anything at it.
#[instrument(skip(state))]
pub async fn cook_meal(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<CookRequest>,
) -> Result<(StatusCode, Json<CookedMealResponse>), ApiError> {
    let raw = repo::latest_plan(&state.db, session.user_id).await?;
    let plan = raw.map(|v| normalize(&v)).unwrap_or_default();

    let mut flow = CookFlow::new();
    let pending = flow.begin(plan.find(req.day, &req.slot), Some(&session))?;

    match repo::insert_cooked_meal(&state.db, &pending).await {
        Ok(row) => {
            flow.confirm(row.meal_id);
            info!(meal_id = %row.meal_id, meal_name = %row.meal_name, "meal cooked");
            Ok((StatusCode::CREATED, Json(row.into())))
        }
        Err(e) => Err(flow.fail(format!("{e:#}"))),
    }
}
