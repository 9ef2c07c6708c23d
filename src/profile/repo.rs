use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use super::repo_types::{Profile, ProfileView};

pub async fn get_view(db: &PgPool, user_id: Uuid) -> sqlx::Result<Option<ProfileView>> {
    sqlx::query_as::<_, ProfileView>(
        r#"
        SELECT u.id, u.username, u.email, u.display_name,
               p.first_name, p.last_name, p.age, p.weight_kg, p.height_cm,
               p.bio, p.profile_pic_url
          FROM users u
          LEFT JOIN profiles p ON p.user_id = u.id
         WHERE u.id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await
}

/// Locks the row so concurrent patches of the same profile merge in sequence.
pub async fn find_for_update_tx(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
) -> sqlx::Result<Option<Profile>> {
    sqlx::query_as::<_, Profile>(
        r#"
        SELECT first_name, last_name, age, weight_kg, height_cm, bio, profile_pic_url
          FROM profiles
         WHERE user_id = $1
           FOR UPDATE
        "#,
    )
    .bind(user_id)
    .fetch_optional(&mut **tx)
    .await
}

pub async fn upsert_tx(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    p: &Profile,
) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO profiles
            (user_id, first_name, last_name, age, weight_kg, height_cm, bio, profile_pic_url)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        ON CONFLICT (user_id) DO UPDATE SET
            first_name      = EXCLUDED.first_name,
            last_name       = EXCLUDED.last_name,
            age             = EXCLUDED.age,
            weight_kg       = EXCLUDED.weight_kg,
            height_cm       = EXCLUDED.height_cm,
            bio             = EXCLUDED.bio,
            profile_pic_url = EXCLUDED.profile_pic_url,
            updated_at      = now()
        "#,
    )
    .bind(user_id)
    .bind(&p.first_name)
    .bind(&p.last_name)
    .bind(p.age)
    .bind(p.weight_kg)
    .bind(p.height_cm)
    .bind(&p.bio)
    .bind(&p.profile_pic_url)
    .execute(&mut **tx)
    .await?;
    Ok(())
}

pub async fn update_email_tx(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    email: &str,
) -> sqlx::Result<()> {
    sqlx::query("UPDATE users SET email = $2 WHERE id = $1")
        .bind(user_id)
        .bind(email)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

pub async fn insert_bmi_tx(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    bmi: f64,
) -> sqlx::Result<()> {
    sqlx::query("INSERT INTO bmi_history (user_id, bmi) VALUES ($1, $2)")
        .bind(user_id)
        .bind(bmi)
        .execute(&mut **tx)
        .await?;
    Ok(())
}
