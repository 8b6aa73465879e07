use super::assessment::round_to;
use super::scenario::{ChargerMix, ScenarioParameters};
use crate::context::ReferenceContext;
use serde::{Deserialize, Serialize};

/// Non-EV demand during the peak window, MW.
const BASE_PEAK_DEMAND_MW: f64 = 100.0;
/// Not every EV in the peak window charges at once.
const DIVERSITY_FACTOR: f64 = 2.0;
/// Additional demand of the reference study the DG figures were sized for, MW.
const REFERENCE_ADDITIONAL_DEMAND_MW: f64 = 25.0;
const DG_BASE_10KW_MW: f64 = 6.5;
const DG_BASE_20KW_MW: f64 = 24.5;

/// Coarse three-step grid risk from added load. Independent of the assessor's
/// five-step grid risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GridLoadRisk {
    Low,
    Medium,
    High,
}

impl GridLoadRisk {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    fn from_additional_demand(additional_mw: f64) -> Self {
        if additional_mw > 50.0 {
            Self::High
        } else if additional_mw > 30.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridImpactResult {
    pub additional_demand_mw: f64,
    pub total_demand_mw: f64,
    /// Percent of nameplate capacity, capped at 100.
    pub grid_capacity_utilization: f64,
    pub dg_capacity_needed: f64,
    pub grid_risk_level: GridLoadRisk,
    /// True demand above nameplate capacity, even though utilization is capped.
    pub is_grid_overloaded: bool,
}

/// Physical load estimate for a scenario's EV charging.
#[derive(Debug, Clone, Copy)]
pub struct GridImpactCalculator {
    capacity_mw: f64,
}

impl Default for GridImpactCalculator {
    fn default() -> Self {
        Self::from_context(&ReferenceContext::default())
    }
}

impl GridImpactCalculator {
    pub fn from_context(context: &ReferenceContext) -> Self {
        Self {
            capacity_mw: context.grid.total_capacity_mw,
        }
    }

    pub fn capacity_mw(&self) -> f64 {
        self.capacity_mw
    }

    pub fn calculate(&self, scenario: &ScenarioParameters) -> GridImpactResult {
        let scenario = scenario.resolve();
        let peak_share = scenario.peak_charging_share / 100.0;

        let additional = f64::from(scenario.total_evs)
            * effective_kw_per_ev(scenario.charger_types)
            * peak_share
            / 1000.0
            / DIVERSITY_FACTOR;
        let total = BASE_PEAK_DEMAND_MW + additional;
        let utilization = (total / self.capacity_mw * 100.0).min(100.0);
        let dg_needed =
            dg_base_mw(scenario.charger_types) * (additional / REFERENCE_ADDITIONAL_DEMAND_MW);

        GridImpactResult {
            additional_demand_mw: round_to(additional, 2),
            total_demand_mw: round_to(total, 2),
            grid_capacity_utilization: round_to(utilization, 1),
            dg_capacity_needed: round_to(dg_needed, 2),
            grid_risk_level: GridLoadRisk::from_additional_demand(additional),
            is_grid_overloaded: total > self.capacity_mw,
        }
    }
}

/// Blended draw per EV in kW, not the charger rating.
fn effective_kw_per_ev(mix: ChargerMix) -> f64 {
    match mix {
        ChargerMix::TenKilowattFocus => 7.0,
        ChargerMix::TwentyKilowattFocus => 12.0,
        ChargerMix::Balanced | ChargerMix::FastChargeHeavy | ChargerMix::Unrecognized => 10.0,
    }
}

fn dg_base_mw(mix: ChargerMix) -> f64 {
    match mix {
        ChargerMix::TenKilowattFocus => DG_BASE_10KW_MW,
        ChargerMix::TwentyKilowattFocus => DG_BASE_20KW_MW,
        _ => (DG_BASE_10KW_MW + DG_BASE_20KW_MW) / 2.0,
    }
}
