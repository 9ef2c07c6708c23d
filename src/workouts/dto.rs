use serde::Deserialize;

use super::repo_types::NewWorkout;
use crate::{error::AppError, utils::required};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutRequest {
    pub exercise_name: Option<String>,
    pub sets: Option<i32>,
    pub reps: Option<i32>,
    pub weight_kg: Option<f64>,
}

impl TryFrom<CreateWorkoutRequest> for NewWorkout {
    type Error = AppError;

    fn try_from(r: CreateWorkoutRequest) -> Result<Self, Self::Error> {
        let exercise_name = required(r.exercise_name)
            .ok_or_else(|| AppError::Validation("exerciseName is required".into()))?;
        Ok(NewWorkout {
            exercise_name,
            sets: r.sets,
            reps: r.reps,
            weight_kg: r.weight_kg,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_pass_through_unvalidated() {
        let req: CreateWorkoutRequest = serde_json::from_str(
            r#"{"exerciseName":"Deadlift","sets":-3,"reps":0,"weightKg":1000.5}"#,
        )
        .unwrap();
        let w = NewWorkout::try_from(req).unwrap();
        assert_eq!(w.exercise_name, "Deadlift");
        assert_eq!(w.sets, Some(-3));
        assert_eq!(w.reps, Some(0));
        assert_eq!(w.weight_kg, Some(1000.5));
    }

    #[test]
    fn exercise_name_is_required() {
        let req: CreateWorkoutRequest = serde_json::from_str(r#"{"sets":3}"#).unwrap();
        assert!(matches!(NewWorkout::try_from(req), Err(AppError::Validation(_))));
    }
}
