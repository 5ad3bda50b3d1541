//! Once-a-day motivational messages, gated by the `motivational_nudges` setting.

use chrono::NaiveDate;
use rand::Rng;

pub const MOTIVATIONAL_MESSAGES: &[&str] = &[
    "You're doing great! Every small step counts towards better health. 💪",
    "Remember to drink water and take your supplements today! 💧",
    "Your body is strong and capable. Trust the process. 🌸",
    "Consistency is key! Keep tracking your progress. 📊",
    "Take a moment to breathe and relax. You deserve it. 🧘‍♀️",
    "Celebrate small wins! You logged your cycle today. 🎉",
    "Healthy eating is self-care. Your body thanks you! 🥗",
    "Exercise is a celebration of what your body can do! 💃",
    "You're not alone in this journey. We're here for you. 🤗",
    "Rest is productive. Listen to your body's needs. 😴",
];

/// At most one nudge per local calendar day, and none when disabled.
pub fn should_show_nudge(enabled: bool, last_shown: Option<NaiveDate>, today: NaiveDate) -> bool {
    enabled && last_shown != Some(today)
}

pub fn pick_nudge<R: Rng>(rng: &mut R) -> &'static str {
    MOTIVATIONAL_MESSAGES[rng.gen_range(0..MOTIVATIONAL_MESSAGES.len())]
}

/// The nudge to show `today`, if any.
pub fn nudge_for_day<R: Rng>(
    enabled: bool,
    last_shown: Option<NaiveDate>,
    today: NaiveDate,
    rng: &mut R,
) -> Option<&'static str> {
    should_show_nudge(enabled, last_shown, today).then(|| pick_nudge(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn day(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).expect("valid date")
    }

    #[test]
    fn disabled_nudges_never_show() {
        assert!(!should_show_nudge(false, None, day(5)));
        assert!(!should_show_nudge(false, Some(day(1)), day(5)));
    }

    #[test]
    fn one_nudge_per_day() {
        assert!(should_show_nudge(true, None, day(5)));
        assert!(!should_show_nudge(true, Some(day(5)), day(5)));
        assert!(should_show_nudge(true, Some(day(4)), day(5)));
    }

    #[test]
    fn picked_nudges_come_from_the_table() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            assert!(MOTIVATIONAL_MESSAGES.contains(&pick_nudge(&mut rng)));
        }
    }

    #[test]
    fn nudge_for_day_combines_gate_and_pick() {
        let mut rng = StdRng::seed_from_u64(8);
        assert!(nudge_for_day(true, Some(day(5)), day(5), &mut rng).is_none());
        assert!(nudge_for_day(false, None, day(5), &mut rng).is_none());
        let nudge = nudge_for_day(true, Some(day(4)), day(5), &mut rng);
        assert!(nudge.is_some_and(|text| MOTIVATIONAL_MESSAGES.contains(&text)));
    }
}
