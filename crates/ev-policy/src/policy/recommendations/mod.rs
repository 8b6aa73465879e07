mod domain;
mod rules;
mod stakeholder;

pub use domain::{
    Impact, RecommendationCategory, RecommendationGroup, RecommendationPriority,
    RecommendationRecord, RecommendationSet,
};

use super::assessment::AssessmentResult;
use super::scenario::ScenarioParameters;
use tracing::debug;

/// Evaluates every recommendation rule independently and ranks the results.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecommendationGenerator;

impl RecommendationGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(
        &self,
        scenario: &ScenarioParameters,
        assessment: &AssessmentResult,
    ) -> RecommendationSet {
        let scenario = scenario.resolve();
        let mut records = Vec::new();

        records.extend(rules::infrastructure(&scenario, assessment));
        records.extend(rules::grid(&scenario, assessment));
        records.push(rules::fleet_strategy(&scenario));
        records.extend(rules::policy_priority(&scenario));
        records.extend(rules::financial(&scenario));
        records.extend(stakeholder::recommendations_for(scenario.stakeholder));
        records.extend(rules::urgency(assessment));

        debug!(
            count = records.len(),
            urgency = assessment.urgency_level.label(),
            "recommendation rules evaluated"
        );

        RecommendationSet::ranked(records)
    }
}
