use std::sync::Arc;

use chrono::NaiveDate;
use sakhi::workflows::assessment::Questionnaire;
use sakhi::workflows::companion::Sender;
use sakhi::workflows::tracking::{
    CycleEntry, JsonFileStore, StateStore, TrackerService, WeightLogImporter,
};

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).expect("valid date")
}

#[test]
fn file_backed_service_survives_restart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("data").join("sakhi_app_data.json");

    {
        let service = TrackerService::new(Arc::new(JsonFileStore::new(&path)));
        service
            .record_assessment(Questionnaire::standard().highest_answers())
            .expect("records");
        service
            .add_cycle_entry(CycleEntry::new(date(2, 1), true))
            .expect("adds");
        service
            .add_cycle_entry(CycleEntry::new(date(2, 28), true))
            .expect("adds");
        service
            .add_chat_message("What should I eat before a workout?".to_string(), Sender::User)
            .expect("adds");
    }

    let reopened = TrackerService::new(Arc::new(JsonFileStore::new(&path)));
    let stats = reopened.stats().expect("stats");
    assert_eq!(stats.days_tracked, 2);
    assert_eq!(stats.avg_cycle_length, 27);
    assert_eq!(stats.total_chats, 1);

    let latest = reopened
        .latest_assessment()
        .expect("reads")
        .expect("assessment stored");
    assert_eq!(latest.score, 40);
}

#[test]
fn imported_weights_are_persisted_newest_first() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("weights.csv");
    std::fs::write(
        &csv_path,
        "date,weight,time\n2025-01-05,74.0,morning\n2025-01-19,73.2,morning\n2025-01-12,73.6,evening\n",
    )
    .expect("write csv");

    let store = Arc::new(JsonFileStore::new(dir.path().join("state.json")));
    let service = TrackerService::new(store.clone());

    let entries = WeightLogImporter::from_path(&csv_path).expect("imports");
    assert_eq!(service.import_weights(entries).expect("stores"), 3);

    let state = store.load().expect("loads");
    let dates: Vec<NaiveDate> = state.weight_entries.iter().map(|entry| entry.date).collect();
    assert_eq!(dates, vec![date(1, 19), date(1, 12), date(1, 5)]);
    assert_eq!(service.stats().expect("stats").current_weight, 73.2);
}

#[test]
fn export_snapshot_includes_everything_logged() {
    let dir = tempfile::tempdir().expect("tempdir");
    let service = TrackerService::new(Arc::new(JsonFileStore::new(dir.path().join("s.json"))));
    service
        .add_cycle_entry(CycleEntry::new(date(3, 3), false))
        .expect("adds");

    let export = service.export().expect("exports");
    let json = serde_json::to_value(&export).expect("serializes");
    assert!(json["exported_at"].is_string());
    assert_eq!(json["cycle_entries"][0]["date"], "2025-03-03");
    assert_eq!(json["subscription_tier"], "free");
}
