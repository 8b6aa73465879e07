use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_scenario_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use ev_policy::config::AppConfig;
use ev_policy::error::AppError;
use ev_policy::policy::{JsonFileSink, PolicyDecisionEngine, ScenarioService};
use ev_policy::telemetry;
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

    let sink = JsonFileSink::new(config.storage.scenario_path.clone());
    let service = Arc::new(ScenarioService::new(PolicyDecisionEngine::default(), sink));

    let app = with_scenario_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        store = %config.storage.scenario_path.display(),
        "ev policy engine ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
