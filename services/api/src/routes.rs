use crate::infra::{deserialize_optional_date, deserialize_optional_timestamp, AppState};
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sakhi::error::AppError;
use sakhi::workflows::companion::{companion_router, CompanionChat, CompanionProvider};
use sakhi::workflows::nudges::nudge_for_day;
use sakhi::workflows::plans::{
    estimate_weekly_calories, generate_diet_plan, nutritional_tips, workout_plan, DayPlan,
    WorkoutDay,
};
use sakhi::workflows::reminders::{due_reminders, pick_reminder, LastShown, WellnessReminder};
use sakhi::workflows::sentiment::{
    mood_trend, summarize_sentiment, IntensifierScope, MoodTrend, SentimentAnalyzer,
    SentimentScore, SentimentSummary,
};
use sakhi::workflows::tracking::{tracker_router, StateStore, TrackerService};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub(crate) struct SentimentRequest {
    pub(crate) text: String,
    #[serde(default)]
    pub(crate) scope: IntensifierScope,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SentimentSummaryRequest {
    pub(crate) entries: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MoodTrendRequest {
    pub(crate) moods: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DietPlanQuery {
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DietPlanResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) seed_date: Option<NaiveDate>,
    pub(crate) days: Vec<DayPlan>,
    pub(crate) estimated_weekly_calories: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct WorkoutPlanResponse {
    pub(crate) days: Vec<WorkoutDay>,
    pub(crate) nutritional_tips: Vec<&'static str>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DueRemindersRequest {
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub(crate) at: Option<NaiveDateTime>,
    #[serde(default)]
    pub(crate) last_shown: LastShown,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct NudgeRequest {
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) last_shown: Option<NaiveDate>,
}

pub(crate) fn with_sakhi_routes<S, P>(
    tracker: Arc<TrackerService<S>>,
    companion: Arc<CompanionChat<P>>,
) -> Router
where
    S: StateStore + 'static,
    P: CompanionProvider + 'static,
{
    let reminders = Router::new()
        .route("/api/v1/reminders/due", post(due_reminders_endpoint::<S>))
        .route("/api/v1/nudges/today", post(nudge_endpoint::<S>))
        .with_state(tracker.clone());

    tracker_router(tracker)
        .merge(companion_router(companion))
        .merge(reminders)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/sentiment", post(sentiment_endpoint))
        .route("/api/v1/sentiment/summary", post(sentiment_summary_endpoint))
        .route("/api/v1/mood/trend", post(mood_trend_endpoint))
        .route("/api/v1/plans/diet", get(diet_plan_endpoint))
        .route("/api/v1/plans/workout", get(workout_plan_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn sentiment_endpoint(
    Json(request): Json<SentimentRequest>,
) -> Json<SentimentScore> {
    Json(SentimentAnalyzer::new(request.scope).analyze(&request.text))
}

pub(crate) async fn sentiment_summary_endpoint(
    Json(request): Json<SentimentSummaryRequest>,
) -> Json<SentimentSummary> {
    Json(summarize_sentiment(&request.entries))
}

pub(crate) async fn mood_trend_endpoint(Json(request): Json<MoodTrendRequest>) -> Json<MoodTrend> {
    Json(mood_trend(&request.moods))
}

pub(crate) async fn diet_plan_endpoint(
    Query(query): Query<DietPlanQuery>,
) -> Json<DietPlanResponse> {
    let days = generate_diet_plan(query.date);
    let estimated_weekly_calories = estimate_weekly_calories(&days);
    Json(DietPlanResponse {
        seed_date: query.date,
        days,
        estimated_weekly_calories,
    })
}

pub(crate) async fn workout_plan_endpoint() -> Json<WorkoutPlanResponse> {
    Json(WorkoutPlanResponse {
        days: workout_plan(),
        nutritional_tips: nutritional_tips(),
    })
}

/// Picks one message for every reminder slot that is enabled in the stored
/// settings and due at `at` (local time, defaults to now).
pub(crate) async fn due_reminders_endpoint<S>(
    State(tracker): State<Arc<TrackerService<S>>>,
    Json(request): Json<DueRemindersRequest>,
) -> Response
where
    S: StateStore + 'static,
{
    let state = match tracker.state() {
        Ok(state) => state,
        Err(err) => return AppError::from(err).into_response(),
    };

    let now = request.at.unwrap_or_else(|| Local::now().naive_local());
    let mut rng = rand::thread_rng();
    let reminders: Vec<WellnessReminder> = due_reminders(
        &state.settings.wellness_reminders,
        &request.last_shown,
        now,
    )
    .into_iter()
    .map(|slot| pick_reminder(slot, now, &mut rng))
    .collect();

    (StatusCode::OK, Json(reminders)).into_response()
}

/// Today's motivational nudge, or `null` when the setting is off or one was
/// already shown on `today` (local date, defaults to now).
pub(crate) async fn nudge_endpoint<S>(
    State(tracker): State<Arc<TrackerService<S>>>,
    Json(request): Json<NudgeRequest>,
) -> Response
where
    S: StateStore + 'static,
{
    let state = match tracker.state() {
        Ok(state) => state,
        Err(err) => return AppError::from(err).into_response(),
    };

    let today = request.today.unwrap_or_else(|| Local::now().date_naive());
    let nudge = nudge_for_day(
        state.settings.motivational_nudges,
        request.last_shown,
        today,
        &mut rand::thread_rng(),
    );

    (StatusCode::OK, Json(json!({ "nudge": nudge }))).into_response()
}
