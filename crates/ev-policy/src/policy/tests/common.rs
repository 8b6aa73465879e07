use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use crate::policy::engine::PolicyDecisionEngine;
use crate::policy::scenario::{
    ChargerMix, InvestmentAppetite, RegulatoryFlexibility, ScenarioParameters,
};
use crate::policy::service::ScenarioService;
use crate::policy::store::{SavedScenario, ScenarioSink, StoreError};
use crate::policy::scenario_router;

/// Oversubscribed, peak-heavy rollout with conservative finance.
pub(super) fn stressed_scenario() -> ScenarioParameters {
    let mut scenario = ScenarioParameters::new(260_000, 300, 50.0, 80.0);
    scenario.charger_types = Some(ChargerMix::FastChargeHeavy);
    scenario.v2g_adoption = Some(0.0);
    scenario.solar_integration = Some(0.0);
    scenario.investment_appetite = Some(InvestmentAppetite::Conservative);
    scenario.regulatory_flexibility = Some(RegulatoryFlexibility::Traditional);
    scenario
}

pub(super) fn baseline_scenario() -> ScenarioParameters {
    ScenarioParameters::baseline()
}

#[derive(Default, Clone)]
pub(super) struct MemorySink {
    pub(super) writes: Arc<Mutex<Vec<usize>>>,
}

impl MemorySink {
    pub(super) fn write_sizes(&self) -> Vec<usize> {
        self.writes.lock().expect("sink mutex poisoned").clone()
    }
}

impl ScenarioSink for MemorySink {
    fn persist(&self, entries: &[SavedScenario]) -> Result<(), StoreError> {
        self.writes
            .lock()
            .expect("sink mutex poisoned")
            .push(entries.len());
        Ok(())
    }
}

pub(super) struct ReadOnlySink;

impl ScenarioSink for ReadOnlySink {
    fn persist(&self, _entries: &[SavedScenario]) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("read-only volume".to_string()))
    }
}

pub(super) fn build_service() -> (ScenarioService<MemorySink>, MemorySink) {
    let sink = MemorySink::default();
    let service = ScenarioService::new(PolicyDecisionEngine::default(), sink.clone());
    (service, sink)
}

pub(super) fn scenario_router_with_service<S: ScenarioSink + 'static>(
    service: ScenarioService<S>,
) -> axum::Router {
    scenario_router(Arc::new(service))
}

pub(super) fn json_request(method: &str, uri: &str, body: &Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(body).expect("serialize body"),
        ))
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn assert_ok(response: &Response) {
    assert_eq!(response.status(), StatusCode::OK);
}
