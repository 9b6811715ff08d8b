use serde_json::Value;
use tracing::warn;

use super::dto::{DayPlan, MealPlan, MealRecord, MealSlot};
use crate::error::ApiError;

/// Turn a stored meal plan into a `MealPlan`.
///
/// The stored value is either the plan object itself or a JSON-encoded
/// string of it (older rows were written string-in-jsonb). Both decode to
/// the same plan. Any decode or shape failure degrades to an empty plan and
/// is logged; it never aborts the caller.
pub fn normalize(raw: &Value) -> MealPlan {
    match try_normalize(raw) {
        Ok(plan) => plan,
        Err(e) => {
            warn!(error = %e, "stored meal plan unusable, rendering empty");
            MealPlan::default()
        }
    }
}

fn try_normalize(raw: &Value) -> Result<MealPlan, ApiError> {
    let decoded;
    let root = match raw {
        Value::String(s) => {
            decoded = serde_json::from_str::<Value>(s)
                .map_err(|e| ApiError::MalformedPlan(e.to_string()))?;
            &decoded
        }
        other => other,
    };

    let days = root
        .get("days")
        .and_then(Value::as_array)
        .ok_or(ApiError::UnexpectedShape("days is missing or not an array"))?;

    let mut out = Vec::with_capacity(days.len());
    for entry in days {
        let Some(day) = entry.get("day").and_then(Value::as_i64) else {
            warn!("day entry without a numeric day, skipping");
            continue;
        };

        let mut meals = Vec::new();
        if let Some(slots) = entry.get("meals").and_then(Value::as_object) {
            for (slot, meal) in slots {
                meals.push(MealSlot {
                    slot: slot.clone(),
                    meal: meal_record(meal),
                });
            }
        }

        // Source order of days is preserved; no sort.
        out.push(DayPlan { day, meals });
    }

    Ok(MealPlan { days: out })
}

fn meal_record(v: &Value) -> MealRecord {
    MealRecord {
        name: str_field(v, "name"),
        ingredients: v
            .get("ingredients")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default(),
        instructions: str_field(v, "instructions"),
        image_ref: str_field(v, "imageRef"),
    }
}

fn str_field(v: &Value, key: &str) -> String {
    v.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn one_day_plan() -> Value {
        json!({
            "days": [{
                "day": 1,
                "meals": {
                    "breakfast": {
                        "name": "Toast",
                        "ingredients": ["Bread"],
                        "instructions": "Toast it",
                        "imageRef": "x"
                    }
                }
            }]
        })
    }

    #[test]
    fn object_input_produces_one_day_one_slot() {
        let plan = normalize(&one_day_plan());
        assert_eq!(plan.days.len(), 1);
        assert_eq!(plan.days[0].day, 1);
        assert_eq!(plan.days[0].meals.len(), 1);

        let slot = &plan.days[0].meals[0];
        assert_eq!(slot.slot, "breakfast");
        assert_eq!(slot.meal.name, "Toast");
        assert_eq!(slot.meal.ingredients, vec!["Bread"]);
        assert_eq!(slot.meal.instructions, "Toast it");
        assert_eq!(slot.meal.image_ref, "x");
    }

    #[test]
    fn string_and_object_inputs_are_equivalent() {
        let raw = one_day_plan();
        let as_string = Value::String(raw.to_string());
        assert_eq!(normalize(&as_string), normalize(&raw));
    }

    #[test]
    fn malformed_string_degrades_to_empty_plan() {
        let raw = Value::String("{days: not json".into());
        assert!(normalize(&raw).is_empty());
    }

    #[test]
    fn missing_or_wrong_days_degrades_to_empty_plan() {
        assert!(normalize(&json!({ "weeks": [] })).is_empty());
        assert!(normalize(&json!({ "days": "monday" })).is_empty());
        assert!(normalize(&json!(42)).is_empty());
    }

    #[test]
    fn day_order_is_source_order_and_numbers_need_not_be_contiguous() {
        let plan = normalize(&json!({
            "days": [
                { "day": 5, "meals": {} },
                { "day": 2, "meals": {} }
            ]
        }));
        let days: Vec<i64> = plan.days.iter().map(|d| d.day).collect();
        assert_eq!(days, vec![5, 2]);
    }

    #[test]
    fn extra_and_missing_slots_pass_through() {
        let plan = normalize(&json!({
            "days": [{
                "day": 1,
                "meals": {
                    "brunch": { "name": "Eggs", "ingredients": [] },
                    "supper": { "name": "Stew" }
                }
            }]
        }));
        let slots: Vec<&str> = plan.days[0].meals.iter().map(|m| m.slot.as_str()).collect();
        assert_eq!(slots, vec!["brunch", "supper"]);
        // Missing fields degrade to empty values, not errors.
        assert_eq!(plan.days[0].meals[1].meal.ingredients, Vec::<String>::new());
        assert_eq!(plan.days[0].meals[1].meal.instructions, "");
    }

    #[test]
    fn bad_day_entries_are_skipped_not_fatal() {
        let plan = normalize(&json!({
            "days": [
                { "meals": {} },
                { "day": "three", "meals": {} },
                { "day": 4, "meals": {} }
            ]
        }));
        assert_eq!(plan.days.len(), 1);
        assert_eq!(plan.days[0].day, 4);
    }
}
