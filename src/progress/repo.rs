use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// The slice of a workout row the weekly summary needs. `dow` is Postgres'
/// day-of-week: 0 = Sunday .. 6 = Saturday.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct WindowWorkout {
    pub dow: i32,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight_kg: Option<f64>,
}

pub async fn last_seven_days(db: &PgPool, user_id: Uuid) -> sqlx::Result<Vec<WindowWorkout>> {
    sqlx::query_as::<_, WindowWorkout>(
        r#"
        SELECT EXTRACT(DOW FROM created_at)::int AS dow, sets, reps, weight_kg
          FROM workouts
         WHERE user_id = $1
           AND created_at >= now() - INTERVAL '7 days'
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}
