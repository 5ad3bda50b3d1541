use chrono::{Datelike, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

pub const WEEK_DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// One meal slot's worth of options; each option is an ordered list of items.
pub type MealPool = &'static [&'static [&'static str]];

static BREAKFAST: MealPool = &[
    &["Oats with berries and almonds", "Green tea", "Flaxseeds (1 tbsp)"],
    &["Moong dal chilla", "Mint chutney", "Orange juice"],
    &["Idli with sambar", "Coconut chutney", "Apple"],
    &["Vegetable poha", "Curd", "Pomegranate seeds"],
    &["Besan cheela", "Green chutney", "Herbal tea"],
    &["Ragi dosa", "Sambar", "Banana"],
    &["Quinoa upma", "Coconut chutney", "Mixed nuts"],
    &["Multigrain paratha", "Curd", "Seasonal fruit"],
    &["Sprouts salad", "Whole wheat toast", "Green tea"],
    &["Vermicelli upma", "Mint chutney", "Papaya"],
    &["Daliya (broken wheat)", "Mixed vegetables", "Buttermilk"],
    &["Egg white omelette", "Brown bread", "Green smoothie"],
];

static LUNCH: MealPool = &[
    &["Brown rice with dal", "Mixed vegetable curry", "Cucumber raita"],
    &["Roti with palak paneer", "Brown rice", "Salad"],
    &["Vegetable khichdi", "Curd", "Cucumber salad"],
    &["Quinoa pulao", "Rajma curry", "Onion raita"],
    &["Jowar roti", "Bhindi masala", "Dal tadka"],
    &["Bajra roti", "Methi sabzi", "Sprouts salad"],
    &["Brown rice", "Chana masala", "Cucumber-tomato salad"],
    &["Ragi roti", "Paneer bhurji", "Green salad"],
    &["Multigrain roti", "Mix dal", "Steamed vegetables"],
    &["Barnyard millet", "Lauki curry", "Moong dal"],
    &["Whole wheat chapati", "Soya chunks curry", "Beetroot raita"],
    &["Brown rice", "Tofu curry", "Cabbage salad"],
];

static DINNER: MealPool = &[
    &["Grilled chicken/paneer", "Quinoa", "Steamed broccoli"],
    &["Fish curry", "Cauliflower rice", "Sautéed spinach"],
    &["Grilled tofu", "Millet roti", "Mixed vegetables"],
    &["Chicken soup", "Vegetable salad", "Roasted nuts"],
    &["Palak paneer", "Jowar roti", "Cucumber raita"],
    &["Egg curry", "Cauliflower rice", "Green beans"],
    &["Grilled fish", "Quinoa", "Zucchini stir-fry"],
    &["Moong dal khichdi", "Grilled vegetables", "Curd"],
    &["Chicken tikka", "Salad", "Mushroom soup"],
    &["Paneer tikka", "Millet roti", "Mixed vegetable soup"],
    &["Baked fish", "Vegetable soup", "Side salad"],
    &["Vegetable soup", "Grilled chicken", "Steamed vegetables"],
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMeals {
    pub breakfast: Vec<String>,
    pub lunch: Vec<String>,
    pub dinner: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: String,
    pub meals: DayMeals,
}

/// Shuffles each meal pool independently and deals the first seven options to
/// Monday..Sunday. Pools shorter than a week wrap around.
#[derive(Debug, Clone, Copy)]
pub struct DietPlanGenerator {
    breakfast: MealPool,
    lunch: MealPool,
    dinner: MealPool,
}

impl Default for DietPlanGenerator {
    fn default() -> Self {
        Self::standard()
    }
}

impl DietPlanGenerator {
    pub fn standard() -> Self {
        Self::with_pools(BREAKFAST, LUNCH, DINNER)
    }

    /// Every pool must hold at least one option.
    pub fn with_pools(breakfast: MealPool, lunch: MealPool, dinner: MealPool) -> Self {
        Self {
            breakfast,
            lunch,
            dinner,
        }
    }

    pub fn pools(&self) -> [MealPool; 3] {
        [self.breakfast, self.lunch, self.dinner]
    }

    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Vec<DayPlan> {
        let breakfast = shuffled(self.breakfast, rng);
        let lunch = shuffled(self.lunch, rng);
        let dinner = shuffled(self.dinner, rng);

        WEEK_DAYS
            .iter()
            .enumerate()
            .map(|(index, day)| DayPlan {
                day: (*day).to_string(),
                meals: DayMeals {
                    breakfast: pick(&breakfast, index),
                    lunch: pick(&lunch, index),
                    dinner: pick(&dinner, index),
                },
            })
            .collect()
    }
}

/// Seven-day plan. With a date the shuffle is seeded from it, so the same day
/// always yields the same plan; without one every call draws fresh entropy.
pub fn generate_diet_plan(seed_date: Option<NaiveDate>) -> Vec<DayPlan> {
    let generator = DietPlanGenerator::standard();
    match seed_date {
        Some(date) => generator.generate_with(&mut StdRng::seed_from_u64(date_seed(date))),
        None => generator.generate_with(&mut StdRng::from_entropy()),
    }
}

fn date_seed(date: NaiveDate) -> u64 {
    date.num_days_from_ce() as u64
}

fn shuffled<R: Rng>(pool: MealPool, rng: &mut R) -> Vec<&'static [&'static str]> {
    let mut options = pool.to_vec();
    for i in (1..options.len()).rev() {
        let j = rng.gen_range(0..=i);
        options.swap(i, j);
    }
    options
}

fn pick(options: &[&'static [&'static str]], index: usize) -> Vec<String> {
    if options.is_empty() {
        return Vec::new();
    }
    options[index % options.len()]
        .iter()
        .map(|item| (*item).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn plan_covers_the_week_in_order() {
        let plan = generate_diet_plan(None);
        let days: Vec<&str> = plan.iter().map(|day| day.day.as_str()).collect();
        assert_eq!(days, WEEK_DAYS);
        for day in &plan {
            assert!(!day.meals.breakfast.is_empty());
            assert!(!day.meals.lunch.is_empty());
            assert!(!day.meals.dinner.is_empty());
        }
    }

    #[test]
    fn meals_are_drawn_without_replacement() {
        let plan = generate_diet_plan(None);
        let breakfasts: HashSet<_> = plan.iter().map(|day| &day.meals.breakfast).collect();
        let dinners: HashSet<_> = plan.iter().map(|day| &day.meals.dinner).collect();
        assert_eq!(breakfasts.len(), 7);
        assert_eq!(dinners.len(), 7);
    }

    fn from_pool(pool: MealPool, items: &[String]) -> bool {
        pool.iter()
            .any(|option| option.iter().copied().eq(items.iter().map(String::as_str)))
    }

    #[test]
    fn options_come_from_the_pools_unchanged() {
        for day in generate_diet_plan(None) {
            assert!(from_pool(BREAKFAST, &day.meals.breakfast));
            assert!(from_pool(LUNCH, &day.meals.lunch));
            assert!(from_pool(DINNER, &day.meals.dinner));
        }
    }

    #[test]
    fn same_date_reproduces_the_same_plan() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 14).expect("valid date");
        assert_eq!(generate_diet_plan(Some(date)), generate_diet_plan(Some(date)));
    }

    #[test]
    fn unseeded_calls_vary() {
        let mut rng = StdRng::seed_from_u64(7);
        let generator = DietPlanGenerator::standard();
        let first = generator.generate_with(&mut rng);
        let second = generator.generate_with(&mut rng);
        assert_ne!(first, second);
    }

    #[test]
    fn short_pools_wrap_around_the_week() {
        static ONE: MealPool = &[&["Upma"]];
        static TWO: MealPool = &[&["Dal"], &["Rajma"]];
        let generator = DietPlanGenerator::with_pools(ONE, TWO, ONE);
        let plan = generator.generate_with(&mut StdRng::seed_from_u64(1));

        assert_eq!(plan.len(), 7);
        assert!(plan.iter().all(|day| day.meals.breakfast == ["Upma"]));
        assert_eq!(plan[0].meals.lunch, plan[2].meals.lunch);
        assert_ne!(plan[0].meals.lunch, plan[1].meals.lunch);
    }
}
