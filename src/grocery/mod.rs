mod aggregate;
mod dto;
mod handlers;
mod repo;

use axum::{
    routing::{delete, get},
    Router,
};

use crate::state::AppState;

pub use aggregate::{load, remove, CheckState};
pub use dto::GrocerySection;
pub use repo::CookedMealRow;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/grocery_list", get(handlers::grocery_list))
        .route("/grocery_list/:meal_id", delete(handlers::remove_meal))
}
