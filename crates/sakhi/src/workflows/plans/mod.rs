//! PCOS-friendly weekly plans: a shuffled seven-day diet, the fixed workout
//! programme and general nutrition guidance.

pub mod diet;
pub mod nutrition;
pub mod workout;

pub use diet::{generate_diet_plan, DayMeals, DayPlan, DietPlanGenerator, MealPool, WEEK_DAYS};
pub use nutrition::{estimate_weekly_calories, nutritional_tips, MealCalories};
pub use workout::{workout_plan, WorkoutDay};
