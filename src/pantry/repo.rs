use anyhow::Context;
use sqlx::{FromRow, PgPool};
use time::Date;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct PantryRow {
    pub pantry_id: Uuid,
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit: String,
    pub expiry_date: Option<Date>,
    pub storage_location: String,
}

pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<PantryRow>> {
    let rows = sqlx::query_as::<_, PantryRow>(
        r#"
        SELECT pantry_id, ingredient_name, quantity, unit, expiry_date, storage_location
          FROM pantry
         WHERE user_id = $1
         ORDER BY ingredient_name ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
    .context("list pantry")?;

    Ok(rows)
}

pub async fn insert(
    db: &PgPool,
    user_id: Uuid,
    ingredient_name: &str,
    quantity: f64,
    unit: &str,
    expiry_date: Option<Date>,
    storage_location: &str,
) -> anyhow::Result<PantryRow> {
    let row = sqlx::query_as::<_, PantryRow>(
        r#"
        INSERT INTO pantry (user_id, ingredient_name, quantity, unit, expiry_date, storage_location)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING pantry_id, ingredient_name, quantity, unit, expiry_date, storage_location
        "#,
    )
    .bind(user_id)
    .bind(ingredient_name)
    .bind(quantity)
    .bind(unit)
    .bind(expiry_date)
    .bind(storage_location)
    .fetch_one(db)
    .await
    .context("insert pantry item")?;

    Ok(row)
}

/// Patch semantics: NULL arguments leave the stored value alone.
pub async fn update(
    db: &PgPool,
    user_id: Uuid,
    pantry_id: Uuid,
    quantity: Option<f64>,
    unit: Option<&str>,
    expiry_date: Option<Date>,
    storage_location: Option<&str>,
) -> anyhow::Result<Option<PantryRow>> {
    let row = sqlx::query_as::<_, PantryRow>(
        r#"
        UPDATE pantry
           SET quantity         = COALESCE($3, quantity),
               unit             = COALESCE($4, unit),
               expiry_date      = COALESCE($5, expiry_date),
               storage_location = COALESCE($6, storage_location)
         WHERE user_id = $1 AND pantry_id = $2
        RETURNING pantry_id, ingredient_name, quantity, unit, expiry_date, storage_location
        "#,
    )
    .bind(user_id)
    .bind(pantry_id)
    .bind(quantity)
    .bind(unit)
    .bind(expiry_date)
    .bind(storage_location)
    .fetch_optional(db)
    .await
    .context("update pantry item")?;

    Ok(row)
}

pub async fn delete(db: &PgPool, user_id: Uuid, pantry_id: Uuid) -> anyhow::Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM pantry
         WHERE user_id = $1 AND pantry_id = $2
        "#,
    )
    .bind(user_id)
    .bind(pantry_id)
    .execute(db)
    .await
    .context("delete pantry item")?;

    Ok(result.rows_affected())
}
