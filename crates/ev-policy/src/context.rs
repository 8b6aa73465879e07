//! National reference constants shared by the calculators.

use crate::policy::scenario::ScenarioParameters;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NationalTargets {
    pub ev_2030_target: u32,
    pub ev_2050_target: u32,
    pub charging_stations_2025: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridParameters {
    pub total_capacity_mw: f64,
    pub peak_demand_mw: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicParameters {
    /// USD per kWh.
    pub electricity_tariff: f64,
    /// USD per litre.
    pub fuel_price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FleetBaseline {
    pub total_evs: u32,
    pub e_motos: u32,
}

/// Immutable bundle of national constants, read for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceContext {
    pub targets: NationalTargets,
    pub grid: GridParameters,
    pub economics: EconomicParameters,
    pub fleet: FleetBaseline,
}

impl Default for ReferenceContext {
    fn default() -> Self {
        Self {
            targets: NationalTargets {
                ev_2030_target: 30_000,
                ev_2050_target: 150_000,
                charging_stations_2025: 500,
            },
            grid: GridParameters {
                total_capacity_mw: 230.0,
                peak_demand_mw: 180.0,
            },
            economics: EconomicParameters {
                electricity_tariff: 0.18,
                fuel_price: 1.35,
            },
            fleet: FleetBaseline {
                total_evs: 12_500,
                e_motos: 6_500,
            },
        }
    }
}

impl ReferenceContext {
    /// Where a scenario sits against the national targets, in percent.
    pub fn target_progress(&self, scenario: &ScenarioParameters) -> TargetProgress {
        TargetProgress {
            ev_2030_pct: percent_of(scenario.total_evs, self.targets.ev_2030_target),
            ev_2050_pct: percent_of(scenario.total_evs, self.targets.ev_2050_target),
            charging_stations_pct: percent_of(
                scenario.public_chargers,
                self.targets.charging_stations_2025,
            ),
            fleet_growth_vs_baseline_pct: percent_of(scenario.total_evs, self.fleet.total_evs),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetProgress {
    pub ev_2030_pct: f64,
    pub ev_2050_pct: f64,
    pub charging_stations_pct: f64,
    pub fleet_growth_vs_baseline_pct: f64,
}

fn percent_of(value: u32, target: u32) -> f64 {
    let pct = f64::from(value) / f64::from(target.max(1)) * 100.0;
    (pct * 10.0).round_ties_even() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_progress_against_targets() {
        let context = ReferenceContext::default();
        let progress = context.target_progress(&ScenarioParameters::baseline());

        assert_eq!(progress.ev_2030_pct, 41.7);
        assert_eq!(progress.ev_2050_pct, 8.3);
        assert_eq!(progress.charging_stations_pct, 31.2);
        assert_eq!(progress.fleet_growth_vs_baseline_pct, 100.0);
    }
}
