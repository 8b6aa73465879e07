use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use super::scenario::ScenarioParameters;
use super::service::ScenarioService;
use super::store::{SaveOutcome, ScenarioSink};

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub scenario: ScenarioParameters,
    /// Roadmap start; defaults to today (UTC).
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub scenario: ScenarioParameters,
    #[serde(default)]
    pub against: Option<ScenarioParameters>,
}

#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    pub name: String,
    pub scenario: ScenarioParameters,
}

/// Router exposing the scenario endpoints. Inputs are clamped before they reach
/// the engine.
pub fn scenario_router<S>(service: Arc<ScenarioService<S>>) -> Router
where
    S: ScenarioSink + 'static,
{
    Router::new()
        .route(
            "/api/v1/scenarios",
            get(list_handler::<S>).post(save_handler::<S>),
        )
        .route("/api/v1/scenarios/baseline", get(baseline_handler::<S>))
        .route("/api/v1/scenarios/assess", post(assess_handler::<S>))
        .route("/api/v1/scenarios/grid-impact", post(grid_impact_handler::<S>))
        .route("/api/v1/scenarios/compare", post(compare_handler::<S>))
        .with_state(service)
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub(crate) async fn baseline_handler<S>(State(service): State<Arc<ScenarioService<S>>>) -> Response
where
    S: ScenarioSink + 'static,
{
    let report = service.evaluate(&service.baseline(), today());
    (StatusCode::OK, Json(report)).into_response()
}

pub(crate) async fn assess_handler<S>(
    State(service): State<Arc<ScenarioService<S>>>,
    Json(request): Json<EvaluateRequest>,
) -> Response
where
    S: ScenarioSink + 'static,
{
    let scenario = request.scenario.clamped();
    let start = request.start_date.unwrap_or_else(today);
    let report = service.evaluate(&scenario, start);
    (StatusCode::OK, Json(report)).into_response()
}

pub(crate) async fn grid_impact_handler<S>(
    State(service): State<Arc<ScenarioService<S>>>,
    Json(scenario): Json<ScenarioParameters>,
) -> Response
where
    S: ScenarioSink + 'static,
{
    let impact = service.grid_impact(&scenario.clamped());
    (StatusCode::OK, Json(impact)).into_response()
}

pub(crate) async fn compare_handler<S>(
    State(service): State<Arc<ScenarioService<S>>>,
    Json(request): Json<CompareRequest>,
) -> Response
where
    S: ScenarioSink + 'static,
{
    let scenario = request.scenario.clamped();
    let against = request.against.map(ScenarioParameters::clamped);
    let comparison = service.compare(&scenario, against.as_ref());
    (StatusCode::OK, Json(comparison)).into_response()
}

pub(crate) async fn save_handler<S>(
    State(service): State<Arc<ScenarioService<S>>>,
    Json(request): Json<SaveRequest>,
) -> Response
where
    S: ScenarioSink + 'static,
{
    let name = request.name.trim().to_string();
    if name.is_empty() {
        let payload = json!({ "error": "scenario name must not be empty" });
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response();
    }

    // Persistence is a blocking file write under the store lock.
    let worker = Arc::clone(&service);
    let entry_name = name.clone();
    let scenario = request.scenario.clamped();
    let outcome = match tokio::task::spawn_blocking(move || worker.save(entry_name, scenario)).await
    {
        Ok(outcome) => outcome,
        Err(err) => {
            error!(scenario = %name, error = %err, "scenario save task failed");
            let payload = json!({ "error": "scenario save did not complete" });
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response();
        }
    };
    let status = match outcome {
        SaveOutcome::Saved => StatusCode::CREATED,
        SaveOutcome::SaveFailed(_) => StatusCode::ACCEPTED,
    };
    let payload = json!({ "name": name, "outcome": outcome });
    (status, Json(payload)).into_response()
}

pub(crate) async fn list_handler<S>(State(service): State<Arc<ScenarioService<S>>>) -> Response
where
    S: ScenarioSink + 'static,
{
    (StatusCode::OK, Json(service.saved())).into_response()
}
