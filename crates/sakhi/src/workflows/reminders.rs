//! Time-of-day wellness nudges. All times are the user's local wall-clock time.

use chrono::{NaiveDateTime, Timelike};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::workflows::tracking::ReminderToggles;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderSlot {
    Morning,
    Afternoon,
    Evening,
}

impl ReminderSlot {
    pub const ALL: [ReminderSlot; 3] = [
        ReminderSlot::Morning,
        ReminderSlot::Afternoon,
        ReminderSlot::Evening,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ReminderSlot::Morning => "morning",
            ReminderSlot::Afternoon => "afternoon",
            ReminderSlot::Evening => "evening",
        }
    }

    /// Hours (start inclusive, end exclusive) during which the slot may fire.
    pub const fn active_hours(self) -> (u32, u32) {
        match self {
            ReminderSlot::Morning => (7, 12),
            ReminderSlot::Afternoon => (13, 18),
            ReminderSlot::Evening => (19, 22),
        }
    }

    /// Hours that count as "already shown today" for the slot.
    const fn shown_hours(self) -> (u32, u32) {
        match self {
            ReminderSlot::Morning => (6, 12),
            ReminderSlot::Afternoon => (12, 18),
            ReminderSlot::Evening => (18, 24),
        }
    }

    fn messages(self) -> &'static [(&'static str, &'static str)] {
        match self {
            ReminderSlot::Morning => MORNING,
            ReminderSlot::Afternoon => AFTERNOON,
            ReminderSlot::Evening => EVENING,
        }
    }

    fn enabled_in(self, toggles: &ReminderToggles) -> bool {
        match self {
            ReminderSlot::Morning => toggles.morning,
            ReminderSlot::Afternoon => toggles.afternoon,
            ReminderSlot::Evening => toggles.evening,
        }
    }
}

static MORNING: &[(&str, &str)] = &[
    ("Good morning! Don't forget to take your supplements 💊", "☀️"),
    ("Start your day with a glass of water and some stretching 💧", "🌅"),
    ("Have you logged your morning weight? Track your progress! ⚖️", "📊"),
    ("Remember to have a protein-rich breakfast for stable blood sugar 🥚", "🍳"),
    ("Time for your morning walk! Even 10 minutes helps 🚶‍♀️", "👟"),
];

static AFTERNOON: &[(&str, &str)] = &[
    ("Afternoon reminder: Stay hydrated! Drink some water 💧", "💦"),
    ("Time for a healthy snack! Try nuts or fruits 🥜", "🍎"),
    ("Take a short break and do some deep breathing exercises 🧘‍♀️", "😮‍💨"),
    ("How's your stress level? Try a 5-minute meditation break 🧘", "🕉️"),
    ("Don't skip lunch! Your body needs balanced nutrition 🍱", "🥗"),
];

static EVENING: &[(&str, &str)] = &[
    ("Evening wind-down: Have you logged today's cycle data? 📅", "🌙"),
    ("Prepare for tomorrow: Plan your breakfast and workout 📝", "✅"),
    ("Wind down with some herbal tea before bed 🍵", "☕"),
    ("Remember to take your evening supplements if prescribed 💊", "🌃"),
    ("Log your mood and symptoms for today. Track your patterns! 😊", "📔"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellnessReminder {
    pub id: String,
    pub slot: ReminderSlot,
    pub message: String,
    pub icon: String,
}

/// When each slot last fired, if ever.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastShown {
    pub morning: Option<NaiveDateTime>,
    pub afternoon: Option<NaiveDateTime>,
    pub evening: Option<NaiveDateTime>,
}

impl LastShown {
    pub fn get(&self, slot: ReminderSlot) -> Option<NaiveDateTime> {
        match slot {
            ReminderSlot::Morning => self.morning,
            ReminderSlot::Afternoon => self.afternoon,
            ReminderSlot::Evening => self.evening,
        }
    }

    pub fn mark(&mut self, slot: ReminderSlot, at: NaiveDateTime) {
        match slot {
            ReminderSlot::Morning => self.morning = Some(at),
            ReminderSlot::Afternoon => self.afternoon = Some(at),
            ReminderSlot::Evening => self.evening = Some(at),
        }
    }
}

/// Uniformly picks one of the slot's messages.
pub fn pick_reminder<R: Rng>(
    slot: ReminderSlot,
    now: NaiveDateTime,
    rng: &mut R,
) -> WellnessReminder {
    let messages = slot.messages();
    let (message, icon) = messages[rng.gen_range(0..messages.len())];
    WellnessReminder {
        id: format!("{}-{}", slot.as_str(), now.and_utc().timestamp_millis()),
        slot,
        message: message.to_string(),
        icon: icon.to_string(),
    }
}

pub fn should_show_reminder(
    slot: ReminderSlot,
    last_shown: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> bool {
    if let Some(last) = last_shown {
        let (start, end) = slot.shown_hours();
        if last.date() == now.date() && (start..end).contains(&last.hour()) {
            return false;
        }
    }

    let (start, end) = slot.active_hours();
    (start..end).contains(&now.hour())
}

/// Enabled slots that should fire at `now`.
pub fn due_reminders(
    toggles: &ReminderToggles,
    last_shown: &LastShown,
    now: NaiveDateTime,
) -> Vec<ReminderSlot> {
    ReminderSlot::ALL
        .into_iter()
        .filter(|slot| slot.enabled_in(toggles))
        .filter(|slot| should_show_reminder(*slot, last_shown.get(*slot), now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, day)
            .and_then(|date| date.and_hms_opt(hour, minute, 0))
            .expect("valid timestamp")
    }

    #[test]
    fn slots_fire_only_inside_their_windows() {
        assert!(should_show_reminder(ReminderSlot::Morning, None, at(1, 7, 0)));
        assert!(!should_show_reminder(ReminderSlot::Morning, None, at(1, 12, 0)));
        assert!(!should_show_reminder(ReminderSlot::Afternoon, None, at(1, 12, 30)));
        assert!(should_show_reminder(ReminderSlot::Afternoon, None, at(1, 17, 59)));
        assert!(should_show_reminder(ReminderSlot::Evening, None, at(1, 21, 0)));
        assert!(!should_show_reminder(ReminderSlot::Evening, None, at(1, 22, 0)));
    }

    #[test]
    fn a_slot_shown_today_stays_quiet() {
        let now = at(2, 9, 30);
        assert!(!should_show_reminder(ReminderSlot::Morning, Some(at(2, 7, 5)), now));
        // shown yesterday, or outside the slot's hours today
        assert!(should_show_reminder(ReminderSlot::Morning, Some(at(1, 8, 0)), now));
        assert!(should_show_reminder(ReminderSlot::Morning, Some(at(2, 5, 0)), now));
    }

    #[test]
    fn due_reminders_respect_toggles() {
        let toggles = ReminderToggles {
            morning: true,
            afternoon: false,
            evening: true,
        };
        let mut last = LastShown::default();

        assert_eq!(
            due_reminders(&toggles, &last, at(3, 8, 0)),
            vec![ReminderSlot::Morning]
        );
        assert!(due_reminders(&toggles, &last, at(3, 14, 0)).is_empty());

        last.mark(ReminderSlot::Morning, at(3, 8, 0));
        assert!(due_reminders(&toggles, &last, at(3, 10, 0)).is_empty());
    }

    #[test]
    fn picked_reminders_come_from_the_slot() {
        let mut rng = StdRng::seed_from_u64(11);
        let now = at(4, 19, 30);
        let reminder = pick_reminder(ReminderSlot::Evening, now, &mut rng);

        assert!(EVENING.iter().any(|(message, _)| *message == reminder.message));
        assert_eq!(
            reminder.id,
            format!("evening-{}", now.and_utc().timestamp_millis())
        );
    }
}
