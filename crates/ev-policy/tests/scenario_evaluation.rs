use chrono::NaiveDate;
use ev_policy::policy::{
    ChargerMix, FinancialViability, GridLoadRisk, InvestmentAppetite, PolicyDecisionEngine,
    RecommendationPriority, RegulatoryFlexibility, RiskLevel, ScenarioParameters,
};

fn stressed() -> ScenarioParameters {
    let mut scenario = ScenarioParameters::new(260_000, 300, 50.0, 80.0);
    scenario.charger_types = Some(ChargerMix::FastChargeHeavy);
    scenario.v2g_adoption = Some(0.0);
    scenario.solar_integration = Some(0.0);
    scenario.investment_appetite = Some(InvestmentAppetite::Conservative);
    scenario.regulatory_flexibility = Some(RegulatoryFlexibility::Traditional);
    scenario
}

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

#[test]
fn full_report_for_the_stressed_rollout() {
    let engine = PolicyDecisionEngine::default();
    let report = engine.evaluate(&stressed(), start());

    assert_eq!(report.assessment.infrastructure_pressure, RiskLevel::Critical);
    assert_eq!(report.assessment.grid_risk, RiskLevel::Critical);
    assert_eq!(
        report.assessment.financial_viability,
        FinancialViability::Poor
    );
    assert_eq!(
        report.recommendations.records()[0].priority,
        RecommendationPriority::Critical
    );
    assert_eq!(report.grid_impact.additional_demand_mw, 1040.0);
    assert_eq!(report.grid_impact.grid_capacity_utilization, 100.0);
    assert!(report.grid_impact.is_grid_overloaded);
    assert_eq!(report.grid_impact.grid_risk_level, GridLoadRisk::High);
    assert_eq!(report.roadmap.len(), 3);
    assert_eq!(
        report.roadmap[0].end,
        NaiveDate::from_ymd_opt(2025, 8, 30).expect("valid date")
    );
}

#[test]
fn baseline_report_matches_reference_figures() {
    let engine = PolicyDecisionEngine::default();
    let baseline = engine.baseline_scenario();
    let report = engine.evaluate(&baseline, start());

    assert_eq!(report.assessment.ev_to_charger_ratio, 80.1);
    assert_eq!(report.assessment.infrastructure_pressure, RiskLevel::Medium);
    assert_eq!(report.assessment.grid_risk, RiskLevel::Medium);

    let impact = &report.grid_impact;
    assert_eq!(impact.additional_demand_mw, 31.25);
    assert_eq!(impact.total_demand_mw, 131.25);
    assert_eq!(impact.grid_capacity_utilization, 57.1);
    assert_eq!(impact.dg_capacity_needed, 19.38);
    assert_eq!(impact.grid_risk_level, GridLoadRisk::Medium);
    assert!(!impact.is_grid_overloaded);

    assert_eq!(report.target_progress.ev_2030_pct, 41.7);
    assert_eq!(report.roadmap[0].responsible, "National Government / MININFRA");
}

#[test]
fn utilization_stays_within_bounds_and_tracks_overload() {
    let engine = PolicyDecisionEngine::default();

    for total_evs in (1_000u32..=300_000).step_by(13_000) {
        for peak in [0.0, 25.0, 50.0, 75.0, 100.0] {
            for mix in [
                ChargerMix::TenKilowattFocus,
                ChargerMix::Balanced,
                ChargerMix::TwentyKilowattFocus,
            ] {
                let mut scenario = ScenarioParameters::new(total_evs, 500, 50.0, peak);
                scenario.charger_types = Some(mix);
                let impact = engine.grid_impact(&scenario);

                assert!((0.0..=100.0).contains(&impact.grid_capacity_utilization));
                assert_eq!(impact.is_grid_overloaded, impact.total_demand_mw > 230.0);
            }
        }
    }
}

#[test]
fn evaluation_is_idempotent() {
    let engine = PolicyDecisionEngine::default();
    let scenario = stressed();
    assert_eq!(
        engine.evaluate(&scenario, start()),
        engine.evaluate(&scenario, start())
    );
}

#[test]
fn comparing_stressed_rollout_with_baseline_flags_every_axis() {
    let engine = PolicyDecisionEngine::default();
    let comparison = engine.compare(&stressed(), &engine.baseline_scenario());

    assert_eq!(comparison.differences.len(), 4);
    assert_eq!(
        comparison.differences[0],
        "EV fleet difference: 247,500 vehicles"
    );
    assert!(comparison
        .differences
        .iter()
        .any(|line| line == "Financial viability: Poor vs Moderate"));
    assert_eq!(comparison.recommendation_difference, 2);
}
