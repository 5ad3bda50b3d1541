use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post, put},
    Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use super::import::WeightLogImporter;
use super::service::{TrackerService, TrackerServiceError};
use super::state::{
    CycleEntry, CycleEntryUpdate, HealthReport, SettingsPatch, SubscriptionTier, UserProfile,
    WeightEntry,
};
use super::store::StateStore;
use crate::workflows::assessment::{recommendations, AnswerSet};
use crate::workflows::companion::Sender;

#[derive(Debug, Deserialize)]
pub struct AssessmentRequest {
    pub answers: AnswerSet,
}

#[derive(Debug, Deserialize)]
pub struct NewChatMessage {
    pub text: String,
    pub sender: Sender,
}

#[derive(Debug, Deserialize)]
pub struct TierRequest {
    pub tier: SubscriptionTier,
}

/// Router exposing the tracker state: assessments, logs, settings and export.
pub fn tracker_router<S>(service: Arc<TrackerService<S>>) -> Router
where
    S: StateStore + 'static,
{
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler::<S>))
        .route("/api/v1/assessments", post(assessment_handler::<S>))
        .route("/api/v1/assessments/latest", get(latest_assessment_handler::<S>))
        .route("/api/v1/cycle", post(add_cycle_handler::<S>))
        .route("/api/v1/cycle/mood-trend", get(mood_trend_handler::<S>))
        .route("/api/v1/cycle/:date", patch(update_cycle_handler::<S>))
        .route("/api/v1/weight", post(add_weight_handler::<S>))
        .route("/api/v1/weight/import", post(import_weight_handler::<S>))
        .route("/api/v1/weight/:date", delete(delete_weight_handler::<S>))
        .route("/api/v1/chat/messages", post(add_message_handler::<S>))
        .route("/api/v1/chat/messages/:id/saved", post(toggle_saved_handler::<S>))
        .route("/api/v1/reports", post(add_report_handler::<S>))
        .route("/api/v1/reports/:id", delete(delete_report_handler::<S>))
        .route("/api/v1/user", put(user_handler::<S>))
        .route("/api/v1/subscription", put(tier_handler::<S>))
        .route("/api/v1/settings", patch(settings_handler::<S>))
        .route("/api/v1/stats", get(stats_handler::<S>))
        .route("/api/v1/export", get(export_handler::<S>))
        .with_state(service)
}

fn error_response(error: TrackerServiceError) -> Response {
    let status = match error {
        TrackerServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        TrackerServiceError::Store(_) | TrackerServiceError::LockPoisoned => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

fn respond<T: serde::Serialize>(
    status: StatusCode,
    result: Result<T, TrackerServiceError>,
) -> Response {
    match result {
        Ok(value) => (status, axum::Json(value)).into_response(),
        Err(error) => error_response(error),
    }
}

fn no_content(result: Result<(), TrackerServiceError>) -> Response {
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn questions_handler<S>(State(service): State<Arc<TrackerService<S>>>) -> Response
where
    S: StateStore + 'static,
{
    (StatusCode::OK, axum::Json(service.questionnaire().questions())).into_response()
}

pub(crate) async fn assessment_handler<S>(
    State(service): State<Arc<TrackerService<S>>>,
    axum::Json(request): axum::Json<AssessmentRequest>,
) -> Response
where
    S: StateStore + 'static,
{
    let unanswered: Vec<String> = service
        .questionnaire()
        .unanswered(&request.answers)
        .into_iter()
        .map(str::to_string)
        .collect();
    let recommendations = recommendations(&request.answers, service.questionnaire());

    match service.record_assessment(request.answers) {
        Ok((assessment, record)) => {
            let payload = json!({
                "assessment": assessment,
                "record": record,
                "unanswered": unanswered,
                "recommendations": recommendations,
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn latest_assessment_handler<S>(
    State(service): State<Arc<TrackerService<S>>>,
) -> Response
where
    S: StateStore + 'static,
{
    match service.latest_assessment() {
        Ok(Some(record)) => (StatusCode::OK, axum::Json(record)).into_response(),
        Ok(None) => error_response(TrackerServiceError::NotFound("assessment".to_string())),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn add_cycle_handler<S>(
    State(service): State<Arc<TrackerService<S>>>,
    axum::Json(entry): axum::Json<CycleEntry>,
) -> Response
where
    S: StateStore + 'static,
{
    let stored = entry.clone();
    respond(StatusCode::CREATED, service.add_cycle_entry(entry).map(|()| stored))
}

pub(crate) async fn update_cycle_handler<S>(
    State(service): State<Arc<TrackerService<S>>>,
    Path(date): Path<NaiveDate>,
    axum::Json(update): axum::Json<CycleEntryUpdate>,
) -> Response
where
    S: StateStore + 'static,
{
    respond(StatusCode::OK, service.update_cycle_entry(date, update))
}

pub(crate) async fn mood_trend_handler<S>(State(service): State<Arc<TrackerService<S>>>) -> Response
where
    S: StateStore + 'static,
{
    respond(StatusCode::OK, service.mood_trend())
}

pub(crate) async fn add_weight_handler<S>(
    State(service): State<Arc<TrackerService<S>>>,
    axum::Json(entry): axum::Json<WeightEntry>,
) -> Response
where
    S: StateStore + 'static,
{
    if !entry.weight.is_finite() || entry.weight <= 0.0 {
        let payload = json!({ "error": "weight must be positive" });
        return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
    }
    let stored = entry.clone();
    respond(StatusCode::CREATED, service.add_weight_entry(entry).map(|()| stored))
}

pub(crate) async fn import_weight_handler<S>(
    State(service): State<Arc<TrackerService<S>>>,
    body: String,
) -> Response
where
    S: StateStore + 'static,
{
    let entries = match WeightLogImporter::from_reader(body.as_bytes()) {
        Ok(entries) => entries,
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };
    respond(
        StatusCode::OK,
        service
            .import_weights(entries)
            .map(|imported| json!({ "imported": imported })),
    )
}

pub(crate) async fn delete_weight_handler<S>(
    State(service): State<Arc<TrackerService<S>>>,
    Path(date): Path<NaiveDate>,
) -> Response
where
    S: StateStore + 'static,
{
    no_content(service.delete_weight_entry(date))
}

pub(crate) async fn add_message_handler<S>(
    State(service): State<Arc<TrackerService<S>>>,
    axum::Json(message): axum::Json<NewChatMessage>,
) -> Response
where
    S: StateStore + 'static,
{
    respond(
        StatusCode::CREATED,
        service.add_chat_message(message.text, message.sender),
    )
}

pub(crate) async fn toggle_saved_handler<S>(
    State(service): State<Arc<TrackerService<S>>>,
    Path(id): Path<u64>,
) -> Response
where
    S: StateStore + 'static,
{
    respond(
        StatusCode::OK,
        service
            .toggle_saved(id)
            .map(|saved| json!({ "id": id, "saved": saved })),
    )
}

pub(crate) async fn add_report_handler<S>(
    State(service): State<Arc<TrackerService<S>>>,
    axum::Json(report): axum::Json<HealthReport>,
) -> Response
where
    S: StateStore + 'static,
{
    let stored = report.clone();
    respond(StatusCode::CREATED, service.add_report(report).map(|()| stored))
}

pub(crate) async fn delete_report_handler<S>(
    State(service): State<Arc<TrackerService<S>>>,
    Path(id): Path<String>,
) -> Response
where
    S: StateStore + 'static,
{
    no_content(service.delete_report(&id))
}

pub(crate) async fn user_handler<S>(
    State(service): State<Arc<TrackerService<S>>>,
    axum::Json(user): axum::Json<Option<UserProfile>>,
) -> Response
where
    S: StateStore + 'static,
{
    no_content(service.set_user(user))
}

pub(crate) async fn tier_handler<S>(
    State(service): State<Arc<TrackerService<S>>>,
    axum::Json(request): axum::Json<TierRequest>,
) -> Response
where
    S: StateStore + 'static,
{
    no_content(service.set_subscription_tier(request.tier))
}

pub(crate) async fn settings_handler<S>(
    State(service): State<Arc<TrackerService<S>>>,
    axum::Json(patch): axum::Json<SettingsPatch>,
) -> Response
where
    S: StateStore + 'static,
{
    respond(StatusCode::OK, service.update_settings(patch))
}

pub(crate) async fn stats_handler<S>(State(service): State<Arc<TrackerService<S>>>) -> Response
where
    S: StateStore + 'static,
{
    respond(StatusCode::OK, service.stats())
}

pub(crate) async fn export_handler<S>(State(service): State<Arc<TrackerService<S>>>) -> Response
where
    S: StateStore + 'static,
{
    respond(StatusCode::OK, service.export())
}
