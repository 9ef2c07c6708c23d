use serde::Serialize;

use super::repo::WindowWorkout;

pub const DAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Minutes per week that count as 100%.
pub const WEEKLY_GOAL_MINUTES: i64 = 150;

const MINUTES_PER_SET: i64 = 2;
const DEFAULT_WEIGHT_KG: f64 = 10.0;
const CALORIE_FACTOR: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub labels: [&'static str; 7],
    pub calories: [f64; 7],
    pub workout_minutes: [i64; 7],
    pub total_calories: f64,
    pub total_steps: i64,
    pub weekly_goal: i64,
}

/// Sunday-first (0 = Sunday) to Monday-first (0 = Monday).
pub fn monday_first_index(dow: i32) -> usize {
    (dow + 6).rem_euclid(7) as usize
}

/// Buckets the window's workouts per weekday and derives the goal percentage.
pub fn summarize(rows: &[WindowWorkout]) -> ProgressSummary {
    let mut calories = [0.0_f64; 7];
    let mut minutes = [0_i64; 7];

    for w in rows {
        let day = monday_first_index(w.dow);
        let sets = w.sets.unwrap_or(0) as i64;
        let reps = w.reps.unwrap_or(0) as f64;
        let weight = match w.weight_kg {
            Some(kg) if kg != 0.0 => kg,
            _ => DEFAULT_WEIGHT_KG,
        };

        minutes[day] += sets * MINUTES_PER_SET;
        calories[day] += reps * sets as f64 * weight * CALORIE_FACTOR;
    }

    let total_minutes: i64 = minutes.iter().sum();
    let goal = (total_minutes as f64 / WEEKLY_GOAL_MINUTES as f64 * 100.0).round() as i64;

    ProgressSummary {
        labels: DAY_LABELS,
        calories,
        workout_minutes: minutes,
        total_calories: calories.iter().sum(),
        // No step source is wired up yet.
        total_steps: 0,
        weekly_goal: goal.min(100),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(dow: i32, sets: i32, reps: i32, weight_kg: Option<f64>) -> WindowWorkout {
        WindowWorkout { dow, sets: Some(sets), reps: Some(reps), weight_kg }
    }

    #[test]
    fn remaps_sunday_first_to_monday_first() {
        assert_eq!(monday_first_index(0), 6); // Sunday
        assert_eq!(monday_first_index(1), 0); // Monday
        assert_eq!(monday_first_index(3), 2); // Wednesday
        assert_eq!(monday_first_index(6), 5); // Saturday
    }

    #[test]
    fn monday_and_wednesday_week() {
        let s = summarize(&[row(1, 10, 5, Some(20.0)), row(3, 5, 5, Some(0.0))]);

        assert_eq!(s.workout_minutes, [20, 0, 10, 0, 0, 0, 0]);
        assert!((s.calories[0] - 100.0).abs() < 1e-9);
        assert!((s.calories[2] - 25.0).abs() < 1e-9);
        assert!((s.total_calories - 125.0).abs() < 1e-9);
        assert_eq!(s.weekly_goal, 20);
        assert_eq!(s.total_steps, 0);
        assert_eq!(s.labels[0], "Mon");
    }

    #[test]
    fn missing_weight_defaults_to_ten() {
        let s = summarize(&[WindowWorkout { dow: 5, sets: Some(2), reps: Some(3), weight_kg: None }]);
        assert!((s.calories[4] - 6.0).abs() < 1e-9);
    }

    #[test]
    fn goal_is_capped_at_100() {
        let rows: Vec<_> = (0..7).map(|d| row(d, 20, 1, Some(1.0))).collect();
        let s = summarize(&rows);
        assert_eq!(s.workout_minutes.iter().sum::<i64>(), 280);
        assert_eq!(s.weekly_goal, 100);
    }

    #[test]
    fn empty_window_is_all_zero() {
        let s = summarize(&[]);
        assert_eq!(s.workout_minutes, [0; 7]);
        assert_eq!(s.total_calories, 0.0);
        assert_eq!(s.weekly_goal, 0);
    }

    #[test]
    fn serializes_with_api_field_names() {
        let v = serde_json::to_value(summarize(&[])).unwrap();
        for key in ["labels", "calories", "workoutMinutes", "totalCalories", "totalSteps", "weeklyGoal"] {
            assert!(v.get(key).is_some(), "missing {key}");
        }
    }
}
