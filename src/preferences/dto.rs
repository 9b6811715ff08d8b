use serde::{Deserialize, Serialize};

use super::repo::PreferencesRow;

/// Dietary preferences as exchanged with the client. A user who has never
/// saved any gets the empty default rather than a 404.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub dislikes: Vec<String>,
    #[serde(default)]
    pub diet: String,
    #[serde(default)]
    pub favorite_cuisines: Vec<String>,
    #[serde(default)]
    pub preferred_meal_types: Vec<String>,
    #[serde(default)]
    pub effort_level: String,
}

impl From<PreferencesRow> for Preferences {
    fn from(row: PreferencesRow) -> Self {
        Self {
            allergies: row.allergies,
            dislikes: row.dislikes,
            diet: row.diet,
            favorite_cuisines: row.favorite_cuisines,
            preferred_meal_types: row.preferred_meal_types,
            effort_level: row.effort_level,
        }
    }
}
