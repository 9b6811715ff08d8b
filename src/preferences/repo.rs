use anyhow::Context;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::dto::Preferences;

#[derive(Debug, Clone, FromRow)]
pub struct PreferencesRow {
    pub allergies: Vec<String>,
    pub dislikes: Vec<String>,
    pub diet: String,
    pub favorite_cuisines: Vec<String>,
    pub preferred_meal_types: Vec<String>,
    pub effort_level: String,
}

pub async fn get_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<PreferencesRow>> {
    let row = sqlx::query_as::<_, PreferencesRow>(
        r#"
        SELECT allergies, dislikes, diet, favorite_cuisines, preferred_meal_types, effort_level
          FROM user_preferences
         WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await
    .context("select preferences")?;

    Ok(row)
}

pub async fn upsert(
    db: &PgPool,
    user_id: Uuid,
    prefs: &Preferences,
) -> anyhow::Result<PreferencesRow> {
    let row = sqlx::query_as::<_, PreferencesRow>(
        r#"
        INSERT INTO user_preferences
            (user_id, allergies, dislikes, diet, favorite_cuisines, preferred_meal_types, effort_level)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT (user_id) DO UPDATE
           SET allergies            = EXCLUDED.allergies,
               dislikes             = EXCLUDED.dislikes,
               diet                 = EXCLUDED.diet,
               favorite_cuisines    = EXCLUDED.favorite_cuisines,
               preferred_meal_types = EXCLUDED.preferred_meal_types,
               effort_level         = EXCLUDED.effort_level
        RETURNING allergies, dislikes, diet, favorite_cuisines, preferred_meal_types, effort_level
        "#,
    )
    .bind(user_id)
    .bind(&prefs.allergies)
    .bind(&prefs.dislikes)
    .bind(&prefs.diet)
    .bind(&prefs.favorite_cuisines)
    .bind(&prefs.preferred_meal_types)
    .bind(&prefs.effort_level)
    .fetch_one(db)
    .await
    .context("upsert preferences")?;

    Ok(row)
}
