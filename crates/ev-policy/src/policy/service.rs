use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::NaiveDate;

use super::comparison::ScenarioComparison;
use super::engine::{PolicyDecisionEngine, ScenarioReport};
use super::grid::GridImpactResult;
use super::scenario::ScenarioParameters;
use super::store::{SaveOutcome, SavedScenario, ScenarioSink, ScenarioStore};

/// Service composing the decision engine with the saved-scenario store.
pub struct ScenarioService<S> {
    engine: PolicyDecisionEngine,
    store: Mutex<ScenarioStore<S>>,
}

impl<S> ScenarioService<S>
where
    S: ScenarioSink + 'static,
{
    pub fn new(engine: PolicyDecisionEngine, sink: S) -> Self {
        Self {
            engine,
            store: Mutex::new(ScenarioStore::new(sink)),
        }
    }

    pub fn engine(&self) -> &PolicyDecisionEngine {
        &self.engine
    }

    pub fn baseline(&self) -> ScenarioParameters {
        self.engine.baseline_scenario()
    }

    pub fn evaluate(&self, scenario: &ScenarioParameters, start: NaiveDate) -> ScenarioReport {
        self.engine.evaluate(scenario, start)
    }

    pub fn grid_impact(&self, scenario: &ScenarioParameters) -> GridImpactResult {
        self.engine.grid_impact(scenario)
    }

    /// Compares against `against`, or against the national baseline when absent.
    pub fn compare(
        &self,
        scenario: &ScenarioParameters,
        against: Option<&ScenarioParameters>,
    ) -> ScenarioComparison {
        match against {
            Some(other) => self.engine.compare(scenario, other),
            None => self.engine.compare(scenario, &self.engine.baseline_scenario()),
        }
    }

    /// Assess, recommend and append to the store. Persistence is best effort.
    pub fn save(&self, name: impl Into<String>, scenario: ScenarioParameters) -> SaveOutcome {
        let assessment = self.engine.assess(&scenario);
        let recommendations = self.engine.recommend(&scenario, &assessment);
        self.store()
            .save(name, scenario, assessment, recommendations)
    }

    pub fn saved(&self) -> Vec<SavedScenario> {
        self.store().entries().to_vec()
    }

    fn store(&self) -> MutexGuard<'_, ScenarioStore<S>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
