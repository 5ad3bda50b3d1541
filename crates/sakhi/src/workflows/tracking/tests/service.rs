use super::common::*;
use std::sync::Arc;

use crate::workflows::assessment::{AnswerSet, RiskLevel};
use crate::workflows::companion::Sender;
use crate::workflows::sentiment::Trend;
use crate::workflows::tracking::state::CycleEntryUpdate;
use crate::workflows::tracking::store::StateStore;
use crate::workflows::tracking::{TrackerService, TrackerServiceError};

#[test]
fn record_assessment_persists_newest_first() {
    let (service, store) = build_service();

    let (first, _) = service
        .record_assessment(AnswerSet::new())
        .expect("records");
    let (second, record) = service
        .record_assessment(high_risk_answers())
        .expect("records");

    assert_eq!(first.risk_level, RiskLevel::Low);
    assert_eq!(second.risk_level, RiskLevel::Moderate);
    assert_eq!(record.score, 40);
    assert_eq!(record.max_score, 100);

    let state = store.load().expect("loads");
    assert_eq!(state.assessments.len(), 2);
    assert_eq!(state.latest_assessment(), Some(&record));
    assert_eq!(service.latest_assessment().expect("reads"), Some(record));
}

#[test]
fn updating_a_missing_cycle_entry_is_not_found() {
    let (service, _) = build_service();
    let err = service
        .update_cycle_entry(date(4, 1), CycleEntryUpdate::default())
        .expect_err("missing");
    assert!(matches!(err, TrackerServiceError::NotFound(_)));
}

#[test]
fn weights_import_in_one_save_and_report_stats() {
    let (service, _) = build_service();
    service.add_weight_entry(weight(3, 1, 72.0)).expect("adds");

    let imported = service
        .import_weights(vec![weight(3, 8, 71.4), weight(3, 15, 70.9), weight(3, 8, 71.1)])
        .expect("imports");
    assert_eq!(imported, 3);

    let state = service.state().expect("loads");
    assert_eq!(state.weight_entries.len(), 3);
    assert_eq!(state.weight_entries[1].weight, 71.1);
    assert_eq!(service.stats().expect("stats").current_weight, 70.9);

    service.delete_weight_entry(date(3, 15)).expect("deletes");
    assert!(matches!(
        service.delete_weight_entry(date(3, 15)),
        Err(TrackerServiceError::NotFound(_))
    ));
}

#[test]
fn mood_trend_reads_cycle_moods() {
    let (service, _) = build_service();
    for (day, mood) in [(1, "Very Happy"), (2, "Happy"), (3, "Sad"), (4, "Tired"), (5, "Anxious")] {
        service
            .add_cycle_entry(period_day(5, day, mood))
            .expect("adds");
    }
    assert_eq!(service.mood_trend().expect("trend").trend, Trend::Declining);
}

#[test]
fn chat_messages_count_towards_stats() {
    let (service, _) = build_service();
    let message = service
        .add_chat_message("Is spearmint tea helpful?".to_string(), Sender::User)
        .expect("adds");
    service
        .add_chat_message("It may help some people 🌸".to_string(), Sender::Ai)
        .expect("adds");

    assert!(service.toggle_saved(message.id).expect("toggles"));
    assert_eq!(service.stats().expect("stats").total_chats, 1);
}

#[test]
fn store_failures_surface_as_errors() {
    let service = TrackerService::new(Arc::new(UnavailableStore));
    assert!(matches!(
        service.record_assessment(AnswerSet::new()),
        Err(TrackerServiceError::Store(_))
    ));
    assert!(service.stats().is_err());
}
