use super::diet::DayPlan;

/// Rough per-meal estimates used for the weekly total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealCalories {
    pub breakfast: u32,
    pub lunch: u32,
    pub dinner: u32,
}

impl MealCalories {
    pub const ESTIMATE: MealCalories = MealCalories {
        breakfast: 400,
        lunch: 500,
        dinner: 450,
    };

    pub const fn per_day(self) -> u32 {
        self.breakfast + self.lunch + self.dinner
    }
}

pub fn nutritional_tips() -> Vec<&'static str> {
    vec![
        "Focus on low-GI foods like whole grains, legumes, and non-starchy vegetables",
        "Include anti-inflammatory foods like turmeric, ginger, and green leafy vegetables",
        "Add healthy fats from nuts, seeds, and fatty fish",
        "Limit processed foods and refined sugars",
        "Stay hydrated - aim for 8-10 glasses of water daily",
        "Include protein in every meal to help stabilize blood sugar",
        "Choose complex carbohydrates over simple carbs",
        "Add spearmint tea - studies show it may help with PCOS symptoms",
    ]
}

pub fn estimate_weekly_calories(plan: &[DayPlan]) -> u32 {
    MealCalories::ESTIMATE.per_day() * plan.len() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::plans::generate_diet_plan;

    #[test]
    fn full_week_estimate() {
        assert_eq!(estimate_weekly_calories(&generate_diet_plan(None)), 9450);
        assert_eq!(estimate_weekly_calories(&[]), 0);
    }

    #[test]
    fn eight_tips() {
        assert_eq!(nutritional_tips().len(), 8);
    }
}
