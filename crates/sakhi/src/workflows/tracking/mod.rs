//! Cycle, weight, chat, report and assessment history behind a swappable
//! [`StateStore`], plus the HTTP surface over it.

pub mod import;
pub mod router;
pub mod service;
pub mod state;
pub mod store;

#[cfg(test)]
mod tests;

pub use import::{WeightImportError, WeightLogImporter};
pub use router::tracker_router;
pub use service::{TrackerService, TrackerServiceError};
pub use state::{
    AppSettings, CycleEntry, CycleEntryUpdate, HealthReport, Language, ReminderToggles,
    ReportKind, SettingsPatch, StateExport, SubscriptionTier, TrackerState, TrackerStats,
    UserProfile, WeighTime, WeightEntry, DEFAULT_CYCLE_LENGTH,
};
pub use store::{InMemoryStateStore, JsonFileStore, StateStore, StoreError};
