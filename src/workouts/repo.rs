use sqlx::PgPool;
use uuid::Uuid;

use super::repo_types::{NewWorkout, Workout};

pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> sqlx::Result<Vec<Workout>> {
    sqlx::query_as::<_, Workout>(
        r#"
        SELECT id, user_id, exercise_name, sets, reps, weight_kg, created_at
          FROM workouts
         WHERE user_id = $1
         ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

pub async fn insert(db: &PgPool, user_id: Uuid, w: &NewWorkout) -> sqlx::Result<Workout> {
    sqlx::query_as::<_, Workout>(
        r#"
        INSERT INTO workouts (user_id, exercise_name, sets, reps, weight_kg)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, user_id, exercise_name, sets, reps, weight_kg, created_at
        "#,
    )
    .bind(user_id)
    .bind(&w.exercise_name)
    .bind(w.sets)
    .bind(w.reps)
    .bind(w.weight_kg)
    .fetch_one(db)
    .await
}
