use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryCrewAlerts, InMemoryRecommendationLog, InMemoryStressHistory};
use crate::routes::with_check_routes;
use astra_wellness::config::AppConfig;
use astra_wellness::error::AppError;
use astra_wellness::telemetry;
use astra_wellness::wellness::checks::StressCheckService;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

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

    let check_service = Arc::new(StressCheckService::new(
        Arc::new(InMemoryStressHistory::default()),
        Arc::new(InMemoryRecommendationLog::default()),
        Arc::new(InMemoryCrewAlerts::default()),
        config.history,
    ));

    let app = with_check_routes(check_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        history_limit = config.history.default_limit,
        "astra wellness service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
