mod cook;
mod dto;
mod handlers;
mod normalize;
mod repo;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub use cook::{CookFlow, CookState, PendingCook};
pub use dto::{DayPlan, MealPlan, MealRecord, MealSlot};
pub use normalize::normalize;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/meal_plan", get(handlers::get_meal_plan))
        .route("/meal_plan/cook", post(handlers::cook_meal))
}
