use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use ev_policy::policy::{scenario_router, ScenarioService, ScenarioSink};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_scenario_routes<S>(service: Arc<ScenarioService<S>>) -> axum::Router
where
    S: ScenarioSink + 'static,
{
    scenario_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let (status, label) = if ready {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "initializing")
    };

    (status, Json(json!({ "status": label })))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ev_policy::policy::{PolicyDecisionEngine, SavedScenario, StoreError};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    struct DiscardSink;

    impl ScenarioSink for DiscardSink {
        fn persist(&self, _entries: &[SavedScenario]) -> Result<(), StoreError> {
            Ok(())
        }
    }

    fn app(ready: bool) -> axum::Router {
        let service = Arc::new(ScenarioService::new(
            PolicyDecisionEngine::default(),
            DiscardSink,
        ));
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        with_scenario_routes(service).layer(Extension(state))
    }

    fn get(uri: &str) -> axum::http::Request<axum::body::Body> {
        axum::http::Request::get(uri)
            .body(axum::body::Body::empty())
            .expect("request builds")
    }

    #[tokio::test]
    async fn health_is_always_ok() {
        let response = app(false).oneshot(get("/health")).await.expect("route runs");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn readiness_follows_the_flag() {
        let response = app(false).oneshot(get("/ready")).await.expect("route runs");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = app(true).oneshot(get("/ready")).await.expect("route runs");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn scenario_routes_are_mounted() {
        let response = app(true)
            .oneshot(get("/api/v1/scenarios"))
            .await
            .expect("route runs");
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .expect("read body");
        assert_eq!(&body[..], b"[]");
    }

    #[tokio::test]
    async fn metrics_render_as_prometheus_text() {
        let response = app(true).oneshot(get("/metrics")).await.expect("route runs");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some("text/plain; version=0.0.4")
        );
    }
}
