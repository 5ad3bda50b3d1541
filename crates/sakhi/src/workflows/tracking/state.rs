use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::assessment::AssessmentRecord;
use crate::workflows::companion::{ChatMessage, Sender, WELCOME_MESSAGE};

/// Reported when fewer than two period days are logged.
pub const DEFAULT_CYCLE_LENGTH: i64 = 28;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub join_date: NaiveDate,
}

/// One tracked day. A day is logged at most once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleEntry {
    pub date: NaiveDate,
    pub is_period: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CycleEntry {
    pub fn new(date: NaiveDate, is_period: bool) -> Self {
        Self {
            date,
            is_period,
            mood: None,
            weight: None,
            symptoms: Vec::new(),
            notes: None,
        }
    }
}

/// Partial update merged over an existing entry; absent fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CycleEntryUpdate {
    pub is_period: Option<bool>,
    pub mood: Option<String>,
    pub weight: Option<f64>,
    pub symptoms: Option<Vec<String>>,
    pub notes: Option<String>,
}

impl CycleEntryUpdate {
    fn apply(self, entry: &mut CycleEntry) {
        if let Some(is_period) = self.is_period {
            entry.is_period = is_period;
        }
        if let Some(mood) = self.mood {
            entry.mood = Some(mood);
        }
        if let Some(weight) = self.weight {
            entry.weight = Some(weight);
        }
        if let Some(symptoms) = self.symptoms {
            entry.symptoms = symptoms;
        }
        if let Some(notes) = self.notes {
            entry.notes = Some(notes);
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeighTime {
    #[default]
    Morning,
    Evening,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub date: NaiveDate,
    /// Kilograms.
    pub weight: f64,
    #[serde(default)]
    pub time: WeighTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportKind {
    Blood,
    Ultrasound,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ReportKind,
    pub name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderToggles {
    pub morning: bool,
    pub afternoon: bool,
    pub evening: bool,
}

impl Default for ReminderToggles {
    fn default() -> Self {
        Self {
            morning: true,
            afternoon: true,
            evening: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub dark_mode: bool,
    pub notifications: bool,
    pub language: Language,
    pub research_consent: bool,
    pub motivational_nudges: bool,
    pub wellness_reminders: ReminderToggles,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            notifications: true,
            language: Language::En,
            research_consent: false,
            motivational_nudges: true,
            wellness_reminders: ReminderToggles::default(),
        }
    }
}

/// Shallow settings merge: each present field replaces the stored one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsPatch {
    pub dark_mode: Option<bool>,
    pub notifications: Option<bool>,
    pub language: Option<Language>,
    pub research_consent: Option<bool>,
    pub motivational_nudges: Option<bool>,
    pub wellness_reminders: Option<ReminderToggles>,
}

impl SettingsPatch {
    fn apply(self, settings: &mut AppSettings) {
        if let Some(value) = self.dark_mode {
            settings.dark_mode = value;
        }
        if let Some(value) = self.notifications {
            settings.notifications = value;
        }
        if let Some(value) = self.language {
            settings.language = value;
        }
        if let Some(value) = self.research_consent {
            settings.research_consent = value;
        }
        if let Some(value) = self.motivational_nudges {
            settings.motivational_nudges = value;
        }
        if let Some(value) = self.wellness_reminders {
            settings.wellness_reminders = value;
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Pro,
    Premium,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackerStats {
    pub days_tracked: usize,
    /// Messages the user sent; replies are not counted.
    pub total_chats: usize,
    pub total_reports: usize,
    /// Latest logged weight, 0 when none.
    pub current_weight: f64,
    pub avg_cycle_length: i64,
}

/// The whole persisted document. Entry lists are kept newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerState {
    pub user: Option<UserProfile>,
    pub cycle_entries: Vec<CycleEntry>,
    pub weight_entries: Vec<WeightEntry>,
    pub chat_messages: Vec<ChatMessage>,
    pub reports: Vec<HealthReport>,
    pub assessments: Vec<AssessmentRecord>,
    pub settings: AppSettings,
    pub subscription_tier: SubscriptionTier,
}

impl Default for TrackerState {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl TrackerState {
    /// Fresh state with the greeting as the only chat message.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            user: None,
            cycle_entries: Vec::new(),
            weight_entries: Vec::new(),
            chat_messages: vec![ChatMessage::new(1, WELCOME_MESSAGE, Sender::Ai, now)],
            reports: Vec::new(),
            assessments: Vec::new(),
            settings: AppSettings::default(),
            subscription_tier: SubscriptionTier::Free,
        }
    }

    pub fn set_user(&mut self, user: Option<UserProfile>) {
        self.user = user;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Inserts or replaces the entry for its date.
    pub fn add_cycle_entry(&mut self, entry: CycleEntry) {
        self.cycle_entries.retain(|existing| existing.date != entry.date);
        self.cycle_entries.push(entry);
        self.cycle_entries.sort_by(|a, b| b.date.cmp(&a.date));
    }

    /// Returns false when no entry exists for `date`.
    pub fn update_cycle_entry(&mut self, date: NaiveDate, update: CycleEntryUpdate) -> bool {
        match self.cycle_entries.iter_mut().find(|entry| entry.date == date) {
            Some(entry) => {
                update.apply(entry);
                true
            }
            None => false,
        }
    }

    pub fn cycle_entry(&self, date: NaiveDate) -> Option<&CycleEntry> {
        self.cycle_entries.iter().find(|entry| entry.date == date)
    }

    /// Logged moods, oldest first.
    pub fn mood_history(&self) -> Vec<&str> {
        self.cycle_entries
            .iter()
            .rev()
            .filter_map(|entry| entry.mood.as_deref())
            .collect()
    }

    /// Inserts or replaces the weight for its date.
    pub fn add_weight_entry(&mut self, entry: WeightEntry) {
        self.weight_entries.retain(|existing| existing.date != entry.date);
        self.weight_entries.push(entry);
        self.weight_entries.sort_by(|a, b| b.date.cmp(&a.date));
    }

    pub fn delete_weight_entry(&mut self, date: NaiveDate) -> bool {
        let before = self.weight_entries.len();
        self.weight_entries.retain(|entry| entry.date != date);
        self.weight_entries.len() != before
    }

    /// Appends a message with the next free id.
    pub fn add_chat_message(
        &mut self,
        text: impl Into<String>,
        sender: Sender,
        now: DateTime<Utc>,
    ) -> ChatMessage {
        let id = self
            .chat_messages
            .iter()
            .map(|message| message.id)
            .max()
            .unwrap_or(0)
            + 1;
        let message = ChatMessage::new(id, text, sender, now);
        self.chat_messages.push(message.clone());
        message
    }

    /// Flips the saved flag; returns the new value, or None for an unknown id.
    pub fn toggle_saved(&mut self, id: u64) -> Option<bool> {
        let message = self
            .chat_messages
            .iter_mut()
            .find(|message| message.id == id)?;
        message.saved = !message.saved;
        Some(message.saved)
    }

    pub fn saved_messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.chat_messages.iter().filter(|message| message.saved)
    }

    pub fn add_report(&mut self, report: HealthReport) {
        self.reports.insert(0, report);
    }

    pub fn delete_report(&mut self, id: &str) -> bool {
        let before = self.reports.len();
        self.reports.retain(|report| report.id != id);
        self.reports.len() != before
    }

    pub fn save_assessment(&mut self, record: AssessmentRecord) {
        self.assessments.insert(0, record);
    }

    pub fn latest_assessment(&self) -> Option<&AssessmentRecord> {
        self.assessments.first()
    }

    pub fn update_settings(&mut self, patch: SettingsPatch) {
        patch.apply(&mut self.settings);
    }

    pub fn set_subscription_tier(&mut self, tier: SubscriptionTier) {
        self.subscription_tier = tier;
    }

    pub fn stats(&self) -> TrackerStats {
        let mut period_days: Vec<NaiveDate> = self
            .cycle_entries
            .iter()
            .filter(|entry| entry.is_period)
            .map(|entry| entry.date)
            .collect();
        period_days.sort();

        let avg_cycle_length = if period_days.len() >= 2 {
            let gaps: Vec<i64> = period_days
                .windows(2)
                .map(|pair| (pair[1] - pair[0]).num_days())
                .collect();
            let mean = gaps.iter().sum::<i64>() as f64 / gaps.len() as f64;
            mean.round() as i64
        } else {
            DEFAULT_CYCLE_LENGTH
        };

        TrackerStats {
            days_tracked: self.cycle_entries.len(),
            total_chats: self
                .chat_messages
                .iter()
                .filter(|message| message.sender == Sender::User)
                .count(),
            total_reports: self.reports.len(),
            current_weight: self
                .weight_entries
                .first()
                .map(|entry| entry.weight)
                .unwrap_or(0.0),
            avg_cycle_length,
        }
    }

    pub fn export(&self, exported_at: DateTime<Utc>) -> StateExport {
        StateExport {
            exported_at,
            state: self.clone(),
        }
    }
}

/// Downloadable snapshot of everything the user has logged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateExport {
    pub exported_at: DateTime<Utc>,
    #[serde(flatten)]
    pub state: TrackerState,
}
