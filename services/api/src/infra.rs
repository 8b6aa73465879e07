use chrono::NaiveDate;
use ev_policy::error::AppError;
use ev_policy::policy::ScenarioParameters;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Reads a scenario JSON document; the result is clamped like HTTP input.
pub(crate) fn load_scenario(path: &Path) -> Result<ScenarioParameters, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let scenario: ScenarioParameters = serde_json::from_str(&raw)?;
    Ok(scenario.clamped())
}
