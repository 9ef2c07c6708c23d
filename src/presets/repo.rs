use serde::Serialize;
use sqlx::{FromRow, PgPool};

/// Global catalog entry; seeded by migrations, never written by the app.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PresetExercise {
    pub id: i32,
    pub name: String,
    pub category: Option<String>,
    pub duration: i32,
    pub description: Option<String>,
}

pub async fn list_all(db: &PgPool) -> sqlx::Result<Vec<PresetExercise>> {
    sqlx::query_as::<_, PresetExercise>(
        "SELECT id, name, category, duration, description FROM preset_exercises ORDER BY id ASC",
    )
    .fetch_all(db)
    .await
}

pub async fn find_by_id(db: &PgPool, id: i32) -> sqlx::Result<Option<PresetExercise>> {
    sqlx::query_as::<_, PresetExercise>(
        "SELECT id, name, category, duration, description FROM preset_exercises WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(db)
    .await
}
