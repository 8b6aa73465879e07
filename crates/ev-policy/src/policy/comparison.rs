use super::assessment::{AssessmentResult, ScenarioAssessor};
use super::format;
use super::recommendations::RecommendationGenerator;
use super::scenario::ScenarioParameters;
use serde::{Deserialize, Serialize};

/// Fleet gaps at or below this many vehicles are not worth reporting.
const FLEET_DIFFERENCE_THRESHOLD: i64 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub first_assessment: AssessmentResult,
    pub second_assessment: AssessmentResult,
    pub differences: Vec<String>,
    /// Recommendation count of the first scenario minus that of the second.
    pub recommendation_difference: i64,
}

impl ScenarioComparison {
    pub fn has_differences(&self) -> bool {
        !self.differences.is_empty()
    }
}

/// Side-by-side assessment of two scenarios.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScenarioComparator {
    assessor: ScenarioAssessor,
    generator: RecommendationGenerator,
}

impl ScenarioComparator {
    pub fn new(assessor: ScenarioAssessor, generator: RecommendationGenerator) -> Self {
        Self {
            assessor,
            generator,
        }
    }

    pub fn compare(
        &self,
        first: &ScenarioParameters,
        second: &ScenarioParameters,
    ) -> ScenarioComparison {
        let first_assessment = self.assessor.assess(first);
        let second_assessment = self.assessor.assess(second);

        let mut differences = Vec::new();

        let fleet_gap = (i64::from(first.total_evs) - i64::from(second.total_evs)).abs();
        if fleet_gap > FLEET_DIFFERENCE_THRESHOLD {
            differences.push(format!(
                "EV fleet difference: {} vehicles",
                format::count(fleet_gap)
            ));
        }

        let first_pressure = first_assessment.infrastructure_pressure;
        let second_pressure = second_assessment.infrastructure_pressure;
        if first_pressure != second_pressure {
            differences.push(format!(
                "Infrastructure pressure: {} vs {}",
                first_pressure.label(),
                second_pressure.label()
            ));
        }

        if first_assessment.grid_risk != second_assessment.grid_risk {
            differences.push(format!(
                "Grid risk: {} vs {}",
                first_assessment.grid_risk.label(),
                second_assessment.grid_risk.label()
            ));
        }

        if first_assessment.financial_viability != second_assessment.financial_viability {
            differences.push(format!(
                "Financial viability: {} vs {}",
                first_assessment.financial_viability.label(),
                second_assessment.financial_viability.label()
            ));
        }

        let first_count = self.generator.generate(first, &first_assessment).len();
        let second_count = self.generator.generate(second, &second_assessment).len();

        ScenarioComparison {
            first_assessment,
            second_assessment,
            differences,
            recommendation_difference: count_as_i64(first_count) - count_as_i64(second_count),
        }
    }
}

fn count_as_i64(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}
