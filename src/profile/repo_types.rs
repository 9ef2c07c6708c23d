use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Stored body/profile attributes, one row per user.
#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct Profile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub bio: Option<String>,
    pub profile_pic_url: Option<String>,
}

/// User fields joined with whatever profile fields exist.
#[derive(Debug, Serialize, FromRow)]
pub struct ProfileView {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub age: Option<i32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub bio: Option<String>,
    pub profile_pic_url: Option<String>,
}
