use super::repo::PresetExercise;
use crate::workouts::repo_types::NewWorkout;

/// A completed preset is logged as one set, no weight, duration as reps.
pub fn workout_from_preset(preset: &PresetExercise) -> NewWorkout {
    NewWorkout {
        exercise_name: preset.name.clone(),
        sets: Some(1),
        reps: Some(preset.duration),
        weight_kg: Some(0.0),
    }
}
