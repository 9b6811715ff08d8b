use serde::{Deserialize, Serialize};
use time::{macros::format_description, Date};
use uuid::Uuid;

use super::repo::PantryRow;
use crate::error::ApiError;

#[derive(Debug, Serialize)]
pub struct PantryItem {
    pub pantry_id: Uuid,
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit: String,
    pub expiry_date: Option<String>,
    pub storage_location: String,
}

impl From<PantryRow> for PantryItem {
    fn from(row: PantryRow) -> Self {
        Self {
            pantry_id: row.pantry_id,
            ingredient_name: row.ingredient_name,
            quantity: row.quantity,
            unit: row.unit,
            expiry_date: row.expiry_date.map(format_date),
            storage_location: row.storage_location,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct NewPantryItem {
    pub ingredient_name: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit: String,
    pub expiry_date: Option<String>,
    #[serde(default)]
    pub storage_location: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePantryItem {
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub expiry_date: Option<String>,
    pub storage_location: Option<String>,
}

pub fn format_date(d: Date) -> String {
    let fmt = format_description!("[year]-[month]-[day]");
    d.format(&fmt).unwrap_or_default()
}

pub fn parse_date(s: &str) -> Result<Date, ApiError> {
    let fmt = format_description!("[year]-[month]-[day]");
    Date::parse(s, &fmt).map_err(|_| ApiError::Precondition("expiry_date must be YYYY-MM-DD"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn date_roundtrip() {
        let d = parse_date("2026-03-09").expect("parse");
        assert_eq!(d, date!(2026 - 03 - 09));
        assert_eq!(format_date(d), "2026-03-09");
    }

    #[test]
    fn bad_date_is_a_precondition_error() {
        assert!(matches!(
            parse_date("09/03/2026"),
            Err(ApiError::Precondition(_))
        ));
    }
}
