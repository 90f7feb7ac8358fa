use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::{with_http_layers, with_policy_routes};
use axum_prometheus::PrometheusMetricLayer;
use risk_profile::config::AppConfig;
use risk_profile::error::AppError;
use risk_profile::policies::{PolicyService, ScoringConfig, SystemClock};
use risk_profile::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let scoring = ScoringConfig::default();
    let policy_service = Arc::new(PolicyService::new(Arc::new(SystemClock), scoring));

    let app = with_http_layers(
        with_policy_routes(policy_service),
        app_state,
        config.server.body_limit_bytes,
    )
    .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        body_limit_bytes = config.server.body_limit_bytes,
        "risk profile service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
