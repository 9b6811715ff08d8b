use serde::Serialize;
use uuid::Uuid;

/// Display projection of one cooked meal: a section header plus its
/// ordered ingredient checklist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrocerySection {
    pub meal_id: Uuid,
    pub meal_name: String,
    pub ingredients: Vec<String>,
}
