use std::sync::{Arc, Mutex};

use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

use super::state::{
    AppSettings, CycleEntry, CycleEntryUpdate, HealthReport, SettingsPatch, StateExport,
    SubscriptionTier, TrackerState, TrackerStats, UserProfile, WeightEntry,
};
use super::store::{StateStore, StoreError};
use crate::workflows::assessment::{
    AnswerSet, AssessmentRecord, Questionnaire, RiskAssessment, RiskForest,
};
use crate::workflows::companion::{ChatMessage, Sender};
use crate::workflows::sentiment::{mood_trend, MoodTrend};

/// Service composing the state store with the risk forest. Each mutation is a
/// load, modify, save cycle serialized by a write lock.
pub struct TrackerService<S> {
    store: Arc<S>,
    questionnaire: Questionnaire,
    forest: RiskForest,
    write_lock: Mutex<()>,
}

impl<S> TrackerService<S>
where
    S: StateStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self::with_forest(store, Questionnaire::standard(), RiskForest::standard())
    }

    pub fn with_forest(store: Arc<S>, questionnaire: Questionnaire, forest: RiskForest) -> Self {
        Self {
            store,
            questionnaire,
            forest,
            write_lock: Mutex::new(()),
        }
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    pub fn state(&self) -> Result<TrackerState, TrackerServiceError> {
        Ok(self.store.load()?)
    }

    fn mutate<T>(
        &self,
        change: impl FnOnce(&mut TrackerState) -> T,
    ) -> Result<T, TrackerServiceError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| TrackerServiceError::LockPoisoned)?;
        let mut state = self.store.load()?;
        let outcome = change(&mut state);
        self.store.save(&state)?;
        Ok(outcome)
    }

    /// Scores `answers` and stores the result as the newest assessment.
    pub fn record_assessment(
        &self,
        answers: AnswerSet,
    ) -> Result<(RiskAssessment, AssessmentRecord), TrackerServiceError> {
        self.record_assessment_at(answers, Utc::now())
    }

    pub fn record_assessment_at(
        &self,
        answers: AnswerSet,
        taken_at: DateTime<Utc>,
    ) -> Result<(RiskAssessment, AssessmentRecord), TrackerServiceError> {
        let assessment = self.forest.predict(&answers, self.questionnaire.questions());
        let unanswered = self.questionnaire.unanswered(&answers).len();
        let record = assessment.to_record(answers, taken_at);

        self.mutate(|state| state.save_assessment(record.clone()))?;

        info!(
            risk_score = assessment.risk_score,
            risk_level = assessment.risk_level.label(),
            confidence = assessment.confidence,
            unanswered,
            "assessment recorded"
        );

        Ok((assessment, record))
    }

    pub fn latest_assessment(&self) -> Result<Option<AssessmentRecord>, TrackerServiceError> {
        Ok(self.state()?.latest_assessment().cloned())
    }

    pub fn set_user(&self, user: Option<UserProfile>) -> Result<(), TrackerServiceError> {
        self.mutate(|state| state.set_user(user))
    }

    pub fn add_cycle_entry(&self, entry: CycleEntry) -> Result<(), TrackerServiceError> {
        self.mutate(|state| state.add_cycle_entry(entry))
    }

    pub fn update_cycle_entry(
        &self,
        date: NaiveDate,
        update: CycleEntryUpdate,
    ) -> Result<CycleEntry, TrackerServiceError> {
        self.mutate(|state| {
            if state.update_cycle_entry(date, update) {
                state.cycle_entry(date).cloned()
            } else {
                None
            }
        })?
        .ok_or_else(|| TrackerServiceError::NotFound(format!("cycle entry {date}")))
    }

    pub fn add_weight_entry(&self, entry: WeightEntry) -> Result<(), TrackerServiceError> {
        self.mutate(|state| state.add_weight_entry(entry))
    }

    /// Adds imported weights in one save; later rows win on duplicate dates.
    pub fn import_weights(&self, entries: Vec<WeightEntry>) -> Result<usize, TrackerServiceError> {
        let count = entries.len();
        self.mutate(|state| {
            for entry in entries {
                state.add_weight_entry(entry);
            }
        })?;
        Ok(count)
    }

    pub fn delete_weight_entry(&self, date: NaiveDate) -> Result<(), TrackerServiceError> {
        if self.mutate(|state| state.delete_weight_entry(date))? {
            Ok(())
        } else {
            Err(TrackerServiceError::NotFound(format!("weight entry {date}")))
        }
    }

    pub fn add_chat_message(
        &self,
        text: String,
        sender: Sender,
    ) -> Result<ChatMessage, TrackerServiceError> {
        self.mutate(|state| state.add_chat_message(text, sender, Utc::now()))
    }

    pub fn toggle_saved(&self, id: u64) -> Result<bool, TrackerServiceError> {
        self.mutate(|state| state.toggle_saved(id))?
            .ok_or_else(|| TrackerServiceError::NotFound(format!("chat message {id}")))
    }

    pub fn add_report(&self, report: HealthReport) -> Result<(), TrackerServiceError> {
        self.mutate(|state| state.add_report(report))
    }

    pub fn delete_report(&self, id: &str) -> Result<(), TrackerServiceError> {
        if self.mutate(|state| state.delete_report(id))? {
            Ok(())
        } else {
            Err(TrackerServiceError::NotFound(format!("report {id}")))
        }
    }

    pub fn update_settings(
        &self,
        patch: SettingsPatch,
    ) -> Result<AppSettings, TrackerServiceError> {
        self.mutate(|state| {
            state.update_settings(patch);
            state.settings.clone()
        })
    }

    pub fn set_subscription_tier(&self, tier: SubscriptionTier) -> Result<(), TrackerServiceError> {
        self.mutate(|state| state.set_subscription_tier(tier))
    }

    pub fn stats(&self) -> Result<TrackerStats, TrackerServiceError> {
        Ok(self.state()?.stats())
    }

    /// Trend over the moods attached to cycle entries.
    pub fn mood_trend(&self) -> Result<MoodTrend, TrackerServiceError> {
        let state = self.state()?;
        Ok(mood_trend(&state.mood_history()))
    }

    pub fn export(&self) -> Result<StateExport, TrackerServiceError> {
        Ok(self.state()?.export(Utc::now()))
    }
}

/// Error raised by the tracker service.
#[derive(Debug, thiserror::Error)]
pub enum TrackerServiceError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("{0} not found")]
    NotFound(String),
    #[error("tracker write lock poisoned")]
    LockPoisoned,
}
