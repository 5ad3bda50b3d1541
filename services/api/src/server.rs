use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_sakhi_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use sakhi::config::AppConfig;
use sakhi::error::AppError;
use sakhi::telemetry;
use sakhi::workflows::companion::{CompanionChat, GeminiProvider};
use sakhi::workflows::tracking::{JsonFileStore, TrackerService};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = Arc::new(JsonFileStore::new(config.storage.data_path.clone()));
    let tracker = Arc::new(TrackerService::new(store));
    // Fail fast on an unreadable or corrupt state file.
    tracker.state()?;

    let provider = match GeminiProvider::new(&config.companion) {
        Ok(provider) => Some(Arc::new(provider)),
        Err(err) => {
            warn!(error = %err, "companion running on fallback replies only");
            None
        }
    };
    let companion = Arc::new(CompanionChat::from_optional(provider));

    let app = with_sakhi_routes(tracker, companion)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        data_path = %config.storage.data_path.display(),
        "sakhi companion service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
