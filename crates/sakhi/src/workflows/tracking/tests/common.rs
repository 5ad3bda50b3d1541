use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::assessment::{AnswerSet, Questionnaire};
use crate::workflows::tracking::state::{CycleEntry, TrackerState, WeighTime, WeightEntry};
use crate::workflows::tracking::store::{InMemoryStateStore, StateStore, StoreError};
use crate::workflows::tracking::{tracker_router, TrackerService};

pub(super) fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).expect("valid date")
}

pub(super) fn period_day(month: u32, day: u32, mood: &str) -> CycleEntry {
    let mut entry = CycleEntry::new(date(month, day), true);
    entry.mood = Some(mood.to_string());
    entry
}

pub(super) fn weight(month: u32, day: u32, kg: f64) -> WeightEntry {
    WeightEntry {
        date: date(month, day),
        weight: kg,
        time: WeighTime::Morning,
    }
}

pub(super) fn high_risk_answers() -> AnswerSet {
    Questionnaire::standard().highest_answers()
}

pub(super) fn build_service() -> (TrackerService<InMemoryStateStore>, Arc<InMemoryStateStore>) {
    let store = Arc::new(InMemoryStateStore::default());
    let service = TrackerService::new(store.clone());
    (service, store)
}

pub(super) fn router_with_service(service: TrackerService<InMemoryStateStore>) -> axum::Router {
    tracker_router(Arc::new(service))
}

pub(super) struct UnavailableStore;

impl StateStore for UnavailableStore {
    fn load(&self) -> Result<TrackerState, StoreError> {
        Err(StoreError::Unavailable("disk offline".to_string()))
    }

    fn save(&self, _state: &TrackerState) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("disk offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
