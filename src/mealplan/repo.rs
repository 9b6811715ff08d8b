use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use super::cook::PendingCook;
use crate::grocery::CookedMealRow;

/// Latest stored plan for the user, if any. The column is jsonb but older
/// rows hold a JSON string inside it; the normalizer handles both.
pub async fn latest_plan(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<serde_json::Value>> {
    let row = sqlx::query_as::<_, (serde_json::Value,)>(
        r#"
        SELECT meal_plan
          FROM user_meal_history
         WHERE user_id = $1
         ORDER BY created_at DESC
         LIMIT 1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await
    .context("select latest meal plan")?;

    Ok(row.map(|(plan,)| plan))
}

pub async fn insert_cooked_meal(db: &PgPool, pending: &PendingCook) -> anyhow::Result<CookedMealRow> {
    let ingredients =
        serde_json::to_string(&pending.ingredients).context("encode ingredients")?;

    let row = sqlx::query_as::<_, CookedMealRow>(
        r#"
        INSERT INTO cooked_meals (meal_id, user_id, meal_name, ingredients)
        VALUES ($1, $2, $3, $4)
        RETURNING meal_id, meal_name, ingredients, created_at
        "#,
    )
    .bind(pending.meal_id)
    .bind(pending.user_id)
    .bind(&pending.meal_name)
    .bind(&ingredients)
    .fetch_one(db)
    .await
    .context("insert cooked meal")?;

    Ok(row)
}
