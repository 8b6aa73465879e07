use super::domain::{Impact, RecommendationCategory, RecommendationPriority, RecommendationRecord};
use crate::policy::assessment::{AssessmentResult, RiskLevel};
use crate::policy::format::usd;
use crate::policy::scenario::{PolicyPriority, ResolvedScenario};

const URBAN_FOCUS_THRESHOLD: f64 = 80.0;

pub(crate) fn infrastructure(
    scenario: &ResolvedScenario<'_>,
    assessment: &AssessmentResult,
) -> Option<RecommendationRecord> {
    let pressure = assessment.infrastructure_pressure;
    if !matches!(pressure, RiskLevel::Critical | RiskLevel::High) {
        return None;
    }

    let ratio = assessment.ev_to_charger_ratio;
    let evs = scenario.total_evs;
    let (title, description, timeframe, priority, cost_per_ev) = if ratio > 200.0 {
        (
            "EMERGENCY: Massive Infrastructure Deployment Required",
            format!(
                "Critical infrastructure gap with {ratio:.1}:1 EV-to-charger ratio. Requires immediate deployment of {} new charging stations.",
                evs / 50
            ),
            "3-6 months",
            RecommendationPriority::Critical,
            1500.0,
        )
    } else if ratio > 150.0 {
        (
            "Accelerate Charging Infrastructure Rollout",
            format!(
                "High pressure with {ratio:.1}:1 ratio. Target deployment of {} new stations.",
                evs / 80
            ),
            "6-12 months",
            RecommendationPriority::High,
            1200.0,
        )
    } else {
        (
            "Expand Charging Network",
            format!(
                "Moderate pressure with {ratio:.1}:1 ratio. Plan for {} new stations.",
                evs / 100
            ),
            "12-18 months",
            RecommendationPriority::Medium,
            1000.0,
        )
    };

    Some(
        RecommendationRecord::new(
            title,
            description,
            timeframe,
            RecommendationCategory::Infrastructure,
            priority,
        )
        .with_impact(Impact::High)
        .with_stakeholders(&["MININFRA", "RURA", "City of Kigali"])
        .with_cost(usd(f64::from(evs) * cost_per_ev))
        .with_kpi(format!(
            "Reduce EV-to-charger ratio to 50:1 (Current: {ratio:.1}:1)"
        ))
        .with_actions(infrastructure_actions(scenario, pressure)),
    )
}

pub(crate) fn infrastructure_actions(
    scenario: &ResolvedScenario<'_>,
    pressure: RiskLevel,
) -> Vec<&'static str> {
    let mut actions = match pressure {
        RiskLevel::Critical => vec![
            "Emergency permitting for charging stations",
            "Temporary mobile charging solutions",
            "Priority grid connections",
            "Public land allocation",
        ],
        RiskLevel::High => vec![
            "Fast-track approval process",
            "50% subsidy for public chargers",
            "EV-ready building codes",
            "Corridor development",
        ],
        _ => vec![
            "Standard approval process",
            "30% subsidy for public chargers",
            "Planning for future growth",
            "Public-private partnerships",
        ],
    };

    if scenario.urban_rural_split.urban() > URBAN_FOCUS_THRESHOLD {
        actions.push("Focus on high-density urban charging");
    } else {
        actions.push("Balanced urban-rural deployment");
    }

    actions
}

pub(crate) fn grid(
    scenario: &ResolvedScenario<'_>,
    assessment: &AssessmentResult,
) -> Option<RecommendationRecord> {
    let risk = assessment.grid_risk;
    if !matches!(
        risk,
        RiskLevel::Critical | RiskLevel::High | RiskLevel::MediumHigh
    ) {
        return None;
    }

    let peak = scenario.peak_charging_share;
    let (title, mut description, timeframe, mut mitigation) = if peak > 70.0 {
        (
            "CRITICAL: Immediate Grid Protection Measures",
            format!("Extreme peak charging ({peak}%) risks grid failure. Implement emergency measures."),
            "1-3 months",
            "Mandatory off-peak charging, emergency DG deployment".to_string(),
        )
    } else if peak > 50.0 {
        (
            "Implement Smart Grid Solutions",
            format!("High peak charging ({peak}%) requires advanced grid management."),
            "3-9 months",
            "Time-of-Use tariffs, smart charging, V2G programs".to_string(),
        )
    } else {
        (
            "Proactive Grid Planning",
            format!("Moderate peak charging ({peak}%) allows for planned upgrades."),
            "9-18 months",
            "Grid reinforcement, distributed generation planning".to_string(),
        )
    };

    if scenario.charger_types.is_high_power() {
        description.push_str(&format!(
            " Aggravated by {} strategy.",
            scenario.charger_types.label()
        ));
        mitigation.push_str(", consider charger power management");
    }

    let priority = if matches!(risk, RiskLevel::Critical | RiskLevel::High) {
        RecommendationPriority::High
    } else {
        RecommendationPriority::Medium
    };
    let (impact, cost) = if peak > 50.0 {
        (Impact::High, "$5-15M")
    } else {
        (Impact::Medium, "$2-8M")
    };

    Some(
        RecommendationRecord::new(
            title,
            description,
            timeframe,
            RecommendationCategory::GridManagement,
            priority,
        )
        .with_impact(impact)
        .with_stakeholders(&["REG", "RURA", "MININFRA"])
        .with_cost(cost)
        .with_kpi(format!("Reduce peak charging to <40% (Current: {peak}%)"))
        .with_mitigation(mitigation),
    )
}

/// Always fires; the band only changes the emphasis.
pub(crate) fn fleet_strategy(scenario: &ResolvedScenario<'_>) -> RecommendationRecord {
    let share = scenario.two_wheeler_share;
    let (title, description, actions) = if share > 60.0 {
        (
            "E-Moto Priority Strategy",
            format!(
                "Dominant two-wheeler share ({share}%) requires specialized infrastructure focus."
            ),
            [
                "Deploy high-density e-moto charging hubs",
                "Standardize battery swapping systems",
                "Develop e-moto dedicated lanes",
            ],
        )
    } else if share > 40.0 {
        (
            "Integrated Two-Wheeler Planning",
            format!("Significant two-wheeler share ({share}%) needs balanced approach."),
            [
                "Mixed-use charging stations",
                "E-moto purchase subsidies",
                "Operator training programs",
            ],
        )
    } else {
        (
            "Mainstream EV Focus",
            format!("Lower two-wheeler share ({share}%) allows focus on car infrastructure."),
            [
                "Standard car charging networks",
                "Public charging corridors",
                "Fleet electrification programs",
            ],
        )
    };

    let (impact, priority) = if share > 60.0 {
        (Impact::High, RecommendationPriority::High)
    } else {
        (Impact::Medium, RecommendationPriority::Medium)
    };

    RecommendationRecord::new(
        title,
        description,
        "6-24 months",
        RecommendationCategory::FleetStrategy,
        priority,
    )
    .with_impact(impact)
    .with_stakeholders(&["City of Kigali", "RDB", "Private Sector"])
    .with_cost(usd(f64::from(scenario.total_evs) * 200.0 * (share / 100.0)))
    .with_kpi(format!(
        "Optimize infrastructure for {share}% two-wheeler fleet"
    ))
    .with_actions(actions)
}

pub(crate) fn policy_priority(scenario: &ResolvedScenario<'_>) -> Option<RecommendationRecord> {
    match scenario.policy_priority {
        PolicyPriority::ClimateImpact => Some(renewable_strategy(scenario)),
        PolicyPriority::GridStability => Some(
            RecommendationRecord::new(
                "Grid Resilience Framework",
                "Prioritize grid stability in EV integration planning.",
                "6-18 months",
                RecommendationCategory::GridInfrastructure,
                RecommendationPriority::High,
            )
            .with_impact(Impact::High)
            .with_stakeholders(&["REG", "RURA", "MININFRA"])
            .with_cost("$10-25M")
            .with_kpi("Maintain grid stability at 100,000+ EVs")
            .with_actions([
                "Advanced grid monitoring",
                "Resilience standards",
                "Backup power systems",
            ]),
        ),
        _ => None,
    }
}

fn renewable_strategy(scenario: &ResolvedScenario<'_>) -> RecommendationRecord {
    let solar = scenario.solar_integration;
    let impact = if solar < 50.0 {
        Impact::High
    } else {
        Impact::Medium
    };
    let (priority, actions) = if solar < 30.0 {
        (
            RecommendationPriority::High,
            [
                "Solar mandate for new stations",
                "Renewable energy credits",
                "Green financing",
            ],
        )
    } else {
        (
            RecommendationPriority::Medium,
            [
                "Scale successful models",
                "Grid integration of renewables",
                "Carbon tracking",
            ],
        )
    };

    RecommendationRecord::new(
        "Renewable Charging Strategy",
        format!("Align with climate goals. Current solar integration: {solar}%."),
        "12-36 months",
        RecommendationCategory::ClimateAndEnvironment,
        priority,
    )
    .with_impact(impact)
    .with_stakeholders(&["REMA", "REG", "MININFRA"])
    .with_cost(usd(f64::from(scenario.total_evs) * 300.0))
    .with_kpi(format!(
        "Achieve {}% renewable charging by 2030",
        (solar + 20.0).max(50.0)
    ))
    .with_actions(actions)
}

pub(crate) fn financial(scenario: &ResolvedScenario<'_>) -> Option<RecommendationRecord> {
    let appetite = scenario.investment_appetite;
    let flexibility = scenario.regulatory_flexibility;
    if !(appetite.is_expansive() && flexibility.is_flexible()) {
        return None;
    }

    Some(
        RecommendationRecord::new(
            "Advanced PPP Framework",
            format!(
                "High investment appetite ({}) with flexible regulation ({}) enables innovative partnerships.",
                appetite.label(),
                flexibility.label()
            ),
            "6-24 months",
            RecommendationCategory::Financial,
            RecommendationPriority::High,
        )
        .with_impact(Impact::High)
        .with_stakeholders(&["MINECOFIN", "RDB", "Private Sector"])
        .with_cost("PPP (Public: $10-50M, Private: 3-5x leverage)")
        .with_kpi(format!(
            "Attract {} private investment",
            usd(f64::from(scenario.total_evs) * 100.0)
        ))
        .with_roi("12-20%"),
    )
}

pub(crate) fn urgency(assessment: &AssessmentResult) -> Option<RecommendationRecord> {
    let urgency = assessment.urgency_level;
    if !urgency.is_pressing() {
        return None;
    }

    Some(
        RecommendationRecord::new(
            "Rapid Response Team",
            format!(
                "{} situation detected. Establish cross-functional team.",
                urgency.label()
            ),
            "1 month",
            RecommendationCategory::Governance,
            RecommendationPriority::Critical,
        )
        .with_impact(Impact::High)
        .with_stakeholders(&["All relevant agencies"])
        .with_cost("Minimal")
        .with_kpi("Weekly progress monitoring")
        .with_actions([
            "Immediate stakeholder coordination",
            "Emergency funding access",
            "Fast-track approvals",
        ]),
    )
}
