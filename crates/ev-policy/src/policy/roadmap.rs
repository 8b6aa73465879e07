use super::assessment::{ScenarioAssessor, UrgencyLevel};
use super::recommendations::RecommendationPriority;
use super::scenario::ScenarioParameters;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Whole programme spans three years from the start date.
const PROGRAMME_DAYS: i64 = 1080;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapPhase {
    pub phase: String,
    pub tasks: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub responsible: String,
    pub budget: String,
    pub priority: RecommendationPriority,
}

/// Day offsets for the foundation and scaling phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PhaseSchedule {
    foundation_days: i64,
    scaling_start: i64,
    scaling_days: i64,
}

impl PhaseSchedule {
    const fn for_urgency(urgency: UrgencyLevel) -> Self {
        if urgency.is_pressing() {
            Self {
                foundation_days: 90,
                scaling_start: 91,
                scaling_days: 270,
            }
        } else {
            Self {
                foundation_days: 180,
                scaling_start: 181,
                scaling_days: 360,
            }
        }
    }
}

/// Three-phase implementation timeline, compressed for pressing scenarios.
#[derive(Debug, Default, Clone, Copy)]
pub struct RoadmapGenerator {
    assessor: ScenarioAssessor,
}

impl RoadmapGenerator {
    pub fn new(assessor: ScenarioAssessor) -> Self {
        Self { assessor }
    }

    pub fn generate(&self, scenario: &ScenarioParameters, start: NaiveDate) -> Vec<RoadmapPhase> {
        let urgency = self.assessor.assess(scenario).urgency_level;
        let schedule = PhaseSchedule::for_urgency(urgency);
        let lead = scenario.resolve().stakeholder.to_string();
        let scaling_end = schedule.scaling_start + schedule.scaling_days;

        vec![
            RoadmapPhase {
                phase: "Phase 1: Foundation".to_string(),
                tasks: "Regulatory framework, Pilot programs, Capacity building".to_string(),
                start,
                end: start + Duration::days(schedule.foundation_days),
                responsible: lead,
                budget: "$5-10M".to_string(),
                priority: RecommendationPriority::High,
            },
            RoadmapPhase {
                phase: "Phase 2: Scaling".to_string(),
                tasks: "Infrastructure deployment, Incentive rollout, Grid upgrades".to_string(),
                start: start + Duration::days(schedule.scaling_start),
                end: start + Duration::days(scaling_end),
                responsible: "Multiple stakeholders".to_string(),
                budget: "$20-50M".to_string(),
                priority: RecommendationPriority::Medium,
            },
            RoadmapPhase {
                phase: "Phase 3: Optimization".to_string(),
                tasks: "Smart charging, V2G implementation, System integration".to_string(),
                start: start + Duration::days(scaling_end + 1),
                end: start + Duration::days(PROGRAMME_DAYS),
                responsible: "REG + Private sector".to_string(),
                budget: "$30-70M".to_string(),
                priority: RecommendationPriority::Low,
            },
        ]
    }
}
