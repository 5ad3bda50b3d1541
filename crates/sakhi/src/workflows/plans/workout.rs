use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutDay {
    pub day: String,
    pub kind: String,
    pub duration: String,
    pub exercises: Vec<String>,
}

impl WorkoutDay {
    fn new(day: &str, kind: &str, duration: &str, exercises: &[&str]) -> Self {
        Self {
            day: day.to_string(),
            kind: kind.to_string(),
            duration: duration.to_string(),
            exercises: exercises.iter().map(|item| item.to_string()).collect(),
        }
    }
}

/// The fixed three-day programme shown alongside the diet plan.
pub fn workout_plan() -> Vec<WorkoutDay> {
    vec![
        WorkoutDay::new(
            "Monday",
            "Strength Training",
            "45 mins",
            &[
                "Squats - 3 sets of 12",
                "Lunges - 3 sets of 10",
                "Push-ups - 3 sets of 8",
                "Plank - 3 sets of 30s",
            ],
        ),
        WorkoutDay::new(
            "Tuesday",
            "Cardio & Yoga",
            "40 mins",
            &[
                "Brisk walking - 20 mins",
                "Sun Salutation - 5 rounds",
                "Surya Namaskar",
                "Pranayama - 10 mins",
            ],
        ),
        WorkoutDay::new(
            "Wednesday",
            "HIIT Workout",
            "30 mins",
            &[
                "Burpees - 3 sets of 10",
                "Mountain climbers - 3 sets of 15",
                "Jump squats - 3 sets of 12",
                "Rest intervals - 30s",
            ],
        ),
    ]
}
