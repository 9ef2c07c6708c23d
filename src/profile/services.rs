use super::{dto::ProfilePatch, repo_types::Profile};

/// Overlays the non-null fields of `patch` on `current`. Email lives on the
/// user record and is not part of the result.
pub fn merge_profile(current: Option<Profile>, patch: &ProfilePatch) -> Profile {
    let current = current.unwrap_or_default();
    Profile {
        first_name: patch.first_name.clone().or(current.first_name),
        last_name: patch.last_name.clone().or(current.last_name),
        age: patch.age.or(current.age),
        weight_kg: patch.weight_kg.or(current.weight_kg),
        height_cm: patch.height_cm.or(current.height_cm),
        bio: patch.bio.clone().or(current.bio),
        profile_pic_url: patch.profile_pic_url.clone().or(current.profile_pic_url),
    }
}

/// kg / m². Only defined when both measurements are positive.
pub fn bmi(weight_kg: Option<f64>, height_cm: Option<f64>) -> Option<f64> {
    match (weight_kg, height_cm) {
        (Some(w), Some(h)) if w > 0.0 && h > 0.0 => {
            let m = h / 100.0;
            Some(w / (m * m))
        }
        _ => None,
    }
}

impl Profile {
    pub fn bmi(&self) -> Option<f64> {
        bmi(self.weight_kg, self.height_cm)
    }
}
