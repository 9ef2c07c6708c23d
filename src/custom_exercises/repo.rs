use serde::Serialize;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// User-defined exercise, kept alongside (not inside) the preset catalog.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CustomExercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub duration: Option<i32>,
    pub notes: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewCustomExercise {
    pub name: String,
    pub category: Option<String>,
    pub duration: Option<i32>,
    pub notes: Option<String>,
}

pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> sqlx::Result<Vec<CustomExercise>> {
    sqlx::query_as::<_, CustomExercise>(
        r#"
        SELECT id, user_id, name, category, duration, notes, created_at
          FROM custom_exercises
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
    e: &NewCustomExercise,
) -> sqlx::Result<CustomExercise> {
    sqlx::query_as::<_, CustomExercise>(
        r#"
        INSERT INTO custom_exercises (user_id, name, category, duration, notes)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, name, category, duration, notes, created_at
        "#,
    )
    .bind(user_id)
    .bind(&e.name)
    .bind(&e.category)
    .bind(e.duration)
    .bind(&e.notes)
    .fetch_one(db)
    .await
}
