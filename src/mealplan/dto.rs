use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::grocery::CookedMealRow;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealRecord {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    #[serde(rename = "imageRef")]
    pub image_ref: String,
}

/// One named slot of a day (breakfast, lunch, ...). Slot names come through
/// verbatim from the stored plan; no fixed set is enforced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealSlot {
    pub slot: String,
    pub meal: MealRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    pub day: i64,
    pub meals: Vec<MealSlot>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MealPlan {
    pub days: Vec<DayPlan>,
}

impl MealPlan {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Resolve a (day, slot) selection against the plan.
    pub fn find(&self, day: i64, slot: &str) -> Option<&MealRecord> {
        self.days
            .iter()
            .find(|d| d.day == day)?
            .meals
            .iter()
            .find(|m| m.slot == slot)
            .map(|m| &m.meal)
    }
}

#[derive(Debug, Deserialize)]
pub struct CookRequest {
    pub day: i64,
    pub slot: String,
}

#[derive(Debug, Serialize)]
pub struct CookedMealResponse {
    pub meal_id: Uuid,
    pub meal_name: String,
    pub ingredients: Vec<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<CookedMealRow> for CookedMealResponse {
    fn from(row: CookedMealRow) -> Self {
        // The row was written by us with JSON-encoded ingredients; a decode
        // failure here would mean we stored garbage, so degrade to empty.
        let ingredients = serde_json::from_str(&row.ingredients).unwrap_or_default();
        Self {
            meal_id: row.meal_id,
            meal_name: row.meal_name,
            ingredients,
            created_at: row.created_at,
        }
    }
}
