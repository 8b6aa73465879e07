use super::assessment::{AssessmentResult, ScenarioAssessor};
use super::comparison::{ScenarioComparator, ScenarioComparison};
use super::grid::{GridImpactCalculator, GridImpactResult};
use super::recommendations::{RecommendationGenerator, RecommendationSet};
use super::roadmap::{RoadmapGenerator, RoadmapPhase};
use super::scenario::ScenarioParameters;
use crate::context::{ReferenceContext, TargetProgress};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Everything the decision views need for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub scenario: ScenarioParameters,
    pub assessment: AssessmentResult,
    pub recommendations: RecommendationSet,
    pub grid_impact: GridImpactResult,
    pub roadmap: Vec<RoadmapPhase>,
    pub target_progress: TargetProgress,
}

/// Bundles the reference constants with each calculator.
#[derive(Debug, Clone)]
pub struct PolicyDecisionEngine {
    context: ReferenceContext,
    assessor: ScenarioAssessor,
    generator: RecommendationGenerator,
    grid: GridImpactCalculator,
}

impl Default for PolicyDecisionEngine {
    fn default() -> Self {
        Self::new(ReferenceContext::default())
    }
}

impl PolicyDecisionEngine {
    pub fn new(context: ReferenceContext) -> Self {
        Self {
            grid: GridImpactCalculator::from_context(&context),
            context,
            assessor: ScenarioAssessor::new(),
            generator: RecommendationGenerator::new(),
        }
    }

    pub fn context(&self) -> &ReferenceContext {
        &self.context
    }

    pub fn baseline_scenario(&self) -> ScenarioParameters {
        ScenarioParameters::baseline()
    }

    pub fn assess(&self, scenario: &ScenarioParameters) -> AssessmentResult {
        self.assessor.assess(scenario)
    }

    pub fn recommend(
        &self,
        scenario: &ScenarioParameters,
        assessment: &AssessmentResult,
    ) -> RecommendationSet {
        self.generator.generate(scenario, assessment)
    }

    pub fn grid_impact(&self, scenario: &ScenarioParameters) -> GridImpactResult {
        self.grid.calculate(scenario)
    }

    pub fn roadmap(&self, scenario: &ScenarioParameters, start: NaiveDate) -> Vec<RoadmapPhase> {
        RoadmapGenerator::new(self.assessor).generate(scenario, start)
    }

    pub fn compare(
        &self,
        first: &ScenarioParameters,
        second: &ScenarioParameters,
    ) -> ScenarioComparison {
        ScenarioComparator::new(self.assessor, self.generator).compare(first, second)
    }

    #[instrument(skip_all, fields(total_evs = scenario.total_evs))]
    pub fn evaluate(&self, scenario: &ScenarioParameters, start: NaiveDate) -> ScenarioReport {
        let assessment = self.assess(scenario);
        let recommendations = self.recommend(scenario, &assessment);
        let grid_impact = self.grid_impact(scenario);
        let roadmap = self.roadmap(scenario, start);
        let target_progress = self.context.target_progress(scenario);

        debug!(
            urgency = assessment.urgency_level.label(),
            recommendations = recommendations.len(),
            "scenario evaluated"
        );

        ScenarioReport {
            scenario: scenario.clone(),
            assessment,
            recommendations,
            grid_impact,
            roadmap,
            target_progress,
        }
    }
}
