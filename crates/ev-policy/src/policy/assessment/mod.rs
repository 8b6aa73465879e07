mod ladder;
mod levels;

pub use levels::{
    FinancialViability, PriorityDimension, RiskLevel, SocialAcceptance, UrgencyLevel,
};

use super::scenario::{ResolvedScenario, ScenarioParameters};
use serde::{Deserialize, Serialize};

/// Graded risk picture of a scenario. Fully determined by its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub infrastructure_pressure: RiskLevel,
    pub infrastructure_score: f64,
    pub grid_risk: RiskLevel,
    pub grid_score: f64,
    pub financial_viability: FinancialViability,
    pub financial_score: f64,
    pub social_acceptance: SocialAcceptance,
    pub social_score: f64,
    /// Rounded to one decimal.
    pub ev_to_charger_ratio: f64,
    pub urgency_level: UrgencyLevel,
    pub recommendation_priority: PriorityDimension,
}

/// Stateless scorer mapping a scenario onto the risk ladders.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScenarioAssessor;

impl ScenarioAssessor {
    pub fn new() -> Self {
        Self
    }

    pub fn assess(&self, scenario: &ScenarioParameters) -> AssessmentResult {
        let scenario = scenario.resolve();
        let ratio = scenario.ev_to_charger_ratio();

        let (infrastructure_pressure, infrastructure_score) =
            ladder::INFRASTRUCTURE_PRESSURE.classify(ratio);

        let grid_score = grid_score(&scenario);
        let grid_risk = ladder::GRID_RISK.classify(grid_score);

        let financial_score = (ladder::investment_weight(scenario.investment_appetite)
            + ladder::regulatory_weight(scenario.regulatory_flexibility))
            / 2.0;
        let financial_viability = ladder::FINANCIAL_VIABILITY.classify(financial_score);

        let social_score = 0.5
            + ladder::TWO_WHEELER_BONUS.classify(scenario.two_wheeler_share)
            + (scenario.solar_integration / 100.0) * 0.15;
        let social_acceptance = ladder::SOCIAL_ACCEPTANCE.classify(social_score);

        let urgency_level = ladder::URGENCY.classify(infrastructure_score.max(grid_score));

        AssessmentResult {
            infrastructure_pressure,
            infrastructure_score,
            grid_risk,
            grid_score,
            financial_viability,
            financial_score,
            social_acceptance,
            social_score,
            ev_to_charger_ratio: round_to(ratio, 1),
            urgency_level,
            recommendation_priority: priority_dimension(&scenario, ratio),
        }
    }
}

/// Unbounded below: strong V2G and solar uptake can push the score negative.
fn grid_score(scenario: &ResolvedScenario<'_>) -> f64 {
    ladder::PEAK_CHARGING_BASE.classify(scenario.peak_charging_share)
        + ladder::charger_grid_penalty(scenario.charger_types)
        - (scenario.v2g_adoption / 100.0) * 0.2
        - (scenario.solar_integration / 100.0) * 0.15
}

/// The four scores are not on a common scale; the argmax is kept as-is.
fn priority_dimension(scenario: &ResolvedScenario<'_>, ratio: f64) -> PriorityDimension {
    let finance = if scenario.investment_appetite.is_expansive() {
        0.8
    } else {
        0.5
    };
    let scores = [
        ratio / 200.0,
        scenario.peak_charging_share / 100.0,
        finance,
        (100.0 - scenario.two_wheeler_share) / 100.0,
    ];

    let mut best = (PriorityDimension::Infrastructure, scores[0]);
    for (dimension, score) in PriorityDimension::ordered().into_iter().zip(scores).skip(1) {
        if score > best.1 {
            best = (dimension, score);
        }
    }
    best.0
}

/// Ties go to the even digit.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_dimension_ties_go_to_first_dimension() {
        // infrastructure 0.4, grid 0.5, finance 0.5, social 0.5 -> grid is first at 0.5
        let scenario = ScenarioParameters::new(8_000, 100, 50.0, 50.0);
        let assessment = ScenarioAssessor::new().assess(&scenario);
        assert_eq!(assessment.recommendation_priority, PriorityDimension::Grid);
    }

    #[test]
    fn round_to_handles_one_decimal() {
        assert_eq!(round_to(866.666, 1), 866.7);
        assert_eq!(round_to(80.128, 1), 80.1);
    }

    #[test]
    fn round_to_sends_exact_halves_to_even() {
        assert_eq!(round_to(80.25, 1), 80.2);
        assert_eq!(round_to(80.75, 1), 80.8);
        assert_eq!(round_to(19.375, 2), 19.38);
        assert_eq!(round_to(0.125, 2), 0.12);
    }

    #[test]
    fn ratio_on_an_exact_half_rounds_to_even() {
        // 321 / 4 = 80.25
        let scenario = ScenarioParameters::new(321, 4, 50.0, 40.0);
        let assessment = ScenarioAssessor::new().assess(&scenario);
        assert_eq!(assessment.ev_to_charger_ratio, 80.2);
    }
}
