use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct NutritionEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub meal_type: Option<String>,
    pub protein_grams: Option<f64>,
    pub fat_grams: Option<f64>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewNutritionEntry {
    pub name: String,
    pub meal_type: Option<String>,
    pub protein_grams: Option<f64>,
    pub fat_grams: Option<f64>,
}

pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> sqlx::Result<Vec<NutritionEntry>> {
    sqlx::query_as::<_, NutritionEntry>(
        r#"
        SELECT id, user_id, name, meal_type, protein_grams, fat_grams, created_at
          FROM nutrition
         WHERE user_id = $1
         ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

pub async fn insert(
    db: &PgPool,
    user_id: Uuid,
    e: &NewNutritionEntry,
) -> sqlx::Result<NutritionEntry> {
    sqlx::query_as::<_, NutritionEntry>(
        r#"
        INSERT INTO nutrition (user_id, name, meal_type, protein_grams, fat_grams)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, name, meal_type, protein_grams, fat_grams, created_at
        "#,
    )
    .bind(user_id)
    .bind(&e.name)
    .bind(&e.meal_type)
    .bind(e.protein_grams)
    .bind(e.fat_grams)
    .fetch_one(db)
    .await
}
