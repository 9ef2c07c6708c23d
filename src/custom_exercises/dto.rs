use serde::Deserialize;

use super::repo::NewCustomExercise;
use crate::{error::AppError, utils::required};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomExerciseRequest {
    pub name: Option<String>,
    pub category: Option<String>,
    pub duration: Option<i32>,
    pub notes: Option<String>,
}

impl TryFrom<CreateCustomExerciseRequest> for NewCustomExercise {
    type Error = AppError;

    fn try_from(r: CreateCustomExerciseRequest) -> Result<Self, Self::Error> {
        Ok(NewCustomExercise {
            name: required(r.name).ok_or_else(|| AppError::Validation("name is required".into()))?,
            category: r.category,
            duration: r.duration,
            notes: r.notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_maps_onto_new_exercise() {
        let req: CreateCustomExerciseRequest = serde_json::from_str(
            r#"{"name":" Hill sprints ","category":"cardio","duration":12,"notes":"6 reps"}"#,
        )
        .unwrap();
        let e = NewCustomExercise::try_from(req).unwrap();
        assert_eq!(e.name, "Hill sprints");
        assert_eq!(e.category.as_deref(), Some("cardio"));
        assert_eq!(e.duration, Some(12));
        assert_eq!(e.notes.as_deref(), Some("6 reps"));
    }

    #[test]
    fn name_is_required() {
        let req: CreateCustomExerciseRequest =
            serde_json::from_str(r#"{"category":"mobility","duration":5}"#).unwrap();
        assert!(matches!(
            NewCustomExercise::try_from(req),
            Err(AppError::Validation(_))
        ));
    }
}
