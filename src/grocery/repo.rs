use anyhow::Context;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// A cooked_meals row as stored: `ingredients` is still JSON-encoded text.
/// Decoding it is the aggregator's job, not the repo's.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CookedMealRow {
    pub meal_id: Uuid,
    pub meal_name: String,
    pub ingredients: String,
    pub created_at: OffsetDateTime,
}

pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<CookedMealRow>> {
    let rows = sqlx::query_as::<_, CookedMealRow>(
        r#"
        SELECT meal_id, meal_name, ingredients, created_at
          FROM cooked_meals
         WHERE user_id = $1
         ORDER BY created_at ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("list cooked meals")?;

    Ok(rows)
}

/// Returns the number of rows deleted (0 when the id was already gone).
pub async fn delete_by_meal(db: &PgPool, user_id: Uuid, meal_id: Uuid) -> anyhow::Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM cooked_meals
         WHERE user_id = $1 AND meal_id = $2
        "#,
    )
    .bind(user_id)
    .bind(meal_id)
    .execute(db)
    .await
    .context("delete cooked meal")?;

    Ok(result.rows_affected())
}
