use super::common::*;

use crate::policy::assessment::{
    FinancialViability, PriorityDimension, RiskLevel, ScenarioAssessor, SocialAcceptance,
    UrgencyLevel,
};
use crate::policy::scenario::{InvestmentAppetite, RegulatoryFlexibility, ScenarioParameters};

#[test]
fn stressed_scenario_is_critical_on_both_axes() {
    let assessment = ScenarioAssessor::new().assess(&stressed_scenario());

    assert_eq!(assessment.ev_to_charger_ratio, 866.7);
    assert_eq!(assessment.infrastructure_pressure, RiskLevel::Critical);
    assert_eq!(assessment.infrastructure_score, 1.0);
    assert!((assessment.grid_score - 0.7).abs() < 1e-9);
    assert_eq!(assessment.grid_risk, RiskLevel::Critical);
    assert!((assessment.financial_score - 0.2).abs() < 1e-9);
    assert_eq!(assessment.financial_viability, FinancialViability::Poor);
    assert_eq!(assessment.urgency_level, UrgencyLevel::Immediate);
    assert_eq!(
        assessment.recommendation_priority,
        PriorityDimension::Infrastructure
    );
}

#[test]
fn baseline_follows_exclusive_cut_points() {
    let assessment = ScenarioAssessor::new().assess(&baseline_scenario());

    assert_eq!(assessment.ev_to_charger_ratio, 80.1);
    assert_eq!(assessment.infrastructure_pressure, RiskLevel::Medium);
    // 50% peak sits on the 50 boundary, so the base is 0.2 and not 0.3.
    assert!((assessment.grid_score - 0.1675).abs() < 1e-9);
    assert_eq!(assessment.grid_risk, RiskLevel::Medium);
    // 0.5 does not clear the "> 0.5" Good threshold.
    assert_eq!(assessment.financial_viability, FinancialViability::Moderate);
    assert_eq!(assessment.urgency_level, UrgencyLevel::MediumPriority);
    assert_eq!(assessment.recommendation_priority, PriorityDimension::Grid);
}

#[test]
fn social_acceptance_rewards_two_wheelers_and_solar() {
    let mut scenario = ScenarioParameters::new(20_000, 200, 70.0, 40.0);
    scenario.solar_integration = Some(100.0);
    let assessment = ScenarioAssessor::new().assess(&scenario);

    // 0.5 + 0.2 + 0.15
    assert!((assessment.social_score - 0.85).abs() < 1e-9);
    assert_eq!(assessment.social_acceptance, SocialAcceptance::High);

    let mut scenario = ScenarioParameters::new(20_000, 200, 30.0, 40.0);
    scenario.solar_integration = Some(0.0);
    let assessment = ScenarioAssessor::new().assess(&scenario);
    assert_eq!(assessment.social_acceptance, SocialAcceptance::Low);
}

#[test]
fn expansive_finance_and_flexible_regulation_score_excellent() {
    let mut scenario = ScenarioParameters::new(20_000, 200, 50.0, 40.0);
    scenario.investment_appetite = Some(InvestmentAppetite::Transformative);
    scenario.regulatory_flexibility = Some(RegulatoryFlexibility::Sandbox);
    let assessment = ScenarioAssessor::new().assess(&scenario);

    assert!((assessment.financial_score - 0.9).abs() < 1e-9);
    assert_eq!(assessment.financial_viability, FinancialViability::Excellent);
}

#[test]
fn unknown_labels_take_neutral_weight() {
    let scenario: ScenarioParameters = serde_json::from_value(serde_json::json!({
        "total_evs": 20000,
        "public_chargers": 200,
        "two_wheeler_share": 50,
        "peak_charging_share": 40,
        "investment_appetite": "Speculative",
        "regulatory_flexibility": "Laissez-faire"
    }))
    .expect("scenario parses");

    let assessment = ScenarioAssessor::new().assess(&scenario);
    assert!((assessment.financial_score - 0.5).abs() < 1e-9);
}

#[test]
fn infrastructure_pressure_is_monotone_in_fleet_size() {
    let assessor = ScenarioAssessor::new();
    let mut previous = RiskLevel::Low;

    for total_evs in (1_000..=300_000).step_by(7_000) {
        let scenario = ScenarioParameters::new(total_evs, 500, 50.0, 40.0);
        let pressure = assessor.assess(&scenario).infrastructure_pressure;
        assert!(
            pressure >= previous,
            "{total_evs} EVs dropped pressure from {previous:?} to {pressure:?}"
        );
        previous = pressure;
    }
    assert_eq!(previous, RiskLevel::Critical);
}

#[test]
fn assessment_is_idempotent() {
    let assessor = ScenarioAssessor::new();
    let scenario = stressed_scenario();
    assert_eq!(assessor.assess(&scenario), assessor.assess(&scenario));
}

#[test]
fn strong_v2g_and_solar_can_push_grid_score_negative() {
    let mut scenario = ScenarioParameters::new(20_000, 200, 50.0, 10.0);
    scenario.v2g_adoption = Some(100.0);
    scenario.solar_integration = Some(100.0);
    let assessment = ScenarioAssessor::new().assess(&scenario);

    // 0.1 - 0.2 - 0.15
    assert!((assessment.grid_score + 0.25).abs() < 1e-9);
    assert_eq!(assessment.grid_risk, RiskLevel::Low);
}
