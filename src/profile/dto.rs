use serde::Deserialize;

/// Partial profile update. Absent and `null` fields both mean "keep".
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub bio: Option<String>,
    pub profile_pic_url: Option<String>,
}
