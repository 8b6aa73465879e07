//! Scenario assessment, recommendation and grid-impact engine.
//!
//! Every calculation here is a pure synchronous function of its inputs. The
//! only mutable state is the saved-scenario list held by [`ScenarioStore`].

pub mod assessment;
pub mod comparison;
pub mod engine;
mod format;
pub mod grid;
pub mod import;
pub mod recommendations;
pub mod roadmap;
pub mod router;
pub mod scenario;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use assessment::{
    AssessmentResult, FinancialViability, PriorityDimension, RiskLevel, ScenarioAssessor,
    SocialAcceptance, UrgencyLevel,
};
pub use comparison::{ScenarioComparator, ScenarioComparison};
pub use engine::{PolicyDecisionEngine, ScenarioReport};
pub use grid::{GridImpactCalculator, GridImpactResult, GridLoadRisk};
pub use import::{ImportedScenario, ScenarioImportError, ScenarioImporter};
pub use recommendations::{
    Impact, RecommendationCategory, RecommendationGenerator, RecommendationGroup,
    RecommendationPriority, RecommendationRecord, RecommendationSet,
};
pub use roadmap::{RoadmapGenerator, RoadmapPhase};
pub use router::{scenario_router, CompareRequest, EvaluateRequest, SaveRequest};
pub use scenario::{
    ChargerMix, FleetSegment, InvestmentAppetite, PolicyPriority, RegulatoryFlexibility,
    ResolvedScenario, ScenarioParameters, UrbanRuralSplit,
};
pub use service::ScenarioService;
pub use store::{JsonFileSink, SaveOutcome, SavedScenario, ScenarioSink, ScenarioStore, StoreError};
