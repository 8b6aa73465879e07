use serde::{Deserialize, Serialize};

pub const DEFAULT_EV_GROWTH: f64 = 20.0;
pub const DEFAULT_SOLAR_INTEGRATION: f64 = 30.0;
pub const DEFAULT_V2G_ADOPTION: f64 = 20.0;
pub const DEFAULT_URBAN_RURAL_SPLIT: UrbanRuralSplit = UrbanRuralSplit(70.0, 30.0);

/// Primary policy objective chosen for a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PolicyPriority {
    BalancedGrowth,
    InfrastructureAccess,
    GridStability,
    PrivateInvestment,
    ClimateImpact,
    UrbanAirQuality,
    EnergySecurity,
    JobCreation,
    Unrecognized,
}

impl PolicyPriority {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::BalancedGrowth,
            Self::InfrastructureAccess,
            Self::GridStability,
            Self::PrivateInvestment,
            Self::ClimateImpact,
            Self::UrbanAirQuality,
            Self::EnergySecurity,
            Self::JobCreation,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::BalancedGrowth => "Balanced Growth",
            Self::InfrastructureAccess => "Infrastructure Access & Equity",
            Self::GridStability => "Grid Stability & Resilience",
            Self::PrivateInvestment => "Private Investment Attraction",
            Self::ClimateImpact => "Climate Impact Maximization",
            Self::UrbanAirQuality => "Urban Air Quality",
            Self::EnergySecurity => "Energy Security",
            Self::JobCreation => "Job Creation & Local Industry",
            Self::Unrecognized => "Unrecognized",
        }
    }

    pub fn from_label(value: &str) -> Self {
        let value = value.trim();
        Self::ordered()
            .into_iter()
            .find(|priority| priority.label() == value)
            .unwrap_or(Self::Unrecognized)
    }
}

impl From<String> for PolicyPriority {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<PolicyPriority> for String {
    fn from(value: PolicyPriority) -> Self {
        value.label().to_string()
    }
}

/// Public investment posture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvestmentAppetite {
    Conservative,
    Moderate,
    Aggressive,
    Transformative,
    Unrecognized,
}

impl InvestmentAppetite {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Conservative,
            Self::Moderate,
            Self::Aggressive,
            Self::Transformative,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Conservative => "Conservative",
            Self::Moderate => "Moderate",
            Self::Aggressive => "Aggressive",
            Self::Transformative => "Transformative",
            Self::Unrecognized => "Unrecognized",
        }
    }

    pub fn from_label(value: &str) -> Self {
        let value = value.trim();
        Self::ordered()
            .into_iter()
            .find(|appetite| appetite.label() == value)
            .unwrap_or(Self::Unrecognized)
    }

    pub const fn is_expansive(self) -> bool {
        matches!(self, Self::Aggressive | Self::Transformative)
    }
}

impl From<String> for InvestmentAppetite {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<InvestmentAppetite> for String {
    fn from(value: InvestmentAppetite) -> Self {
        value.label().to_string()
    }
}

/// How far regulators are willing to bend existing frameworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RegulatoryFlexibility {
    Traditional,
    Adaptive,
    InnovationFriendly,
    Sandbox,
    Unrecognized,
}

impl RegulatoryFlexibility {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Traditional,
            Self::Adaptive,
            Self::InnovationFriendly,
            Self::Sandbox,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Traditional => "Traditional",
            Self::Adaptive => "Adaptive",
            Self::InnovationFriendly => "Innovation-Friendly",
            Self::Sandbox => "Sandbox Approach",
            Self::Unrecognized => "Unrecognized",
        }
    }

    pub fn from_label(value: &str) -> Self {
        let value = value.trim();
        Self::ordered()
            .into_iter()
            .find(|flexibility| flexibility.label() == value)
            .unwrap_or(Self::Unrecognized)
    }

    pub const fn is_flexible(self) -> bool {
        matches!(self, Self::InnovationFriendly | Self::Sandbox)
    }
}

impl From<String> for RegulatoryFlexibility {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<RegulatoryFlexibility> for String {
    fn from(value: RegulatoryFlexibility) -> Self {
        value.label().to_string()
    }
}

/// Dominant charger power rating in the public network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ChargerMix {
    TenKilowattFocus,
    Balanced,
    TwentyKilowattFocus,
    FastChargeHeavy,
    Unrecognized,
}

impl ChargerMix {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::TenKilowattFocus,
            Self::Balanced,
            Self::TwentyKilowattFocus,
            Self::FastChargeHeavy,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::TenKilowattFocus => "10kW Focus",
            Self::Balanced => "Balanced",
            Self::TwentyKilowattFocus => "20kW Focus",
            Self::FastChargeHeavy => "Fast-Charge Heavy",
            Self::Unrecognized => "Unrecognized",
        }
    }

    pub fn from_label(value: &str) -> Self {
        let value = value.trim();
        Self::ordered()
            .into_iter()
            .find(|mix| mix.label() == value)
            .unwrap_or(Self::Unrecognized)
    }

    /// High-power mixes aggravate peak load.
    pub const fn is_high_power(self) -> bool {
        matches!(self, Self::TwentyKilowattFocus | Self::FastChargeHeavy)
    }
}

impl From<String> for ChargerMix {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<ChargerMix> for String {
    fn from(value: ChargerMix) -> Self {
        value.label().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FleetSegment {
    PrivateCars,
    EMotos,
    Buses,
    Taxis,
    GovernmentFleets,
    GoodsDelivery,
    Unrecognized,
}

impl FleetSegment {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::PrivateCars,
            Self::EMotos,
            Self::Buses,
            Self::Taxis,
            Self::GovernmentFleets,
            Self::GoodsDelivery,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PrivateCars => "Private Cars",
            Self::EMotos => "E-Motos",
            Self::Buses => "Buses",
            Self::Taxis => "Taxis",
            Self::GovernmentFleets => "Government Fleets",
            Self::GoodsDelivery => "Goods Delivery",
            Self::Unrecognized => "Unrecognized",
        }
    }

    pub fn from_label(value: &str) -> Self {
        let value = value.trim();
        Self::ordered()
            .into_iter()
            .find(|segment| segment.label() == value)
            .unwrap_or(Self::Unrecognized)
    }
}

impl From<String> for FleetSegment {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<FleetSegment> for String {
    fn from(value: FleetSegment) -> Self {
        value.label().to_string()
    }
}

/// Urban and rural shares of charger deployment, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UrbanRuralSplit(pub f64, pub f64);

impl UrbanRuralSplit {
    pub fn from_urban(urban: f64) -> Self {
        let urban = clamp_percent(urban);
        Self(urban, 100.0 - urban)
    }

    pub const fn urban(&self) -> f64 {
        self.0
    }

    pub const fn rural(&self) -> f64 {
        self.1
    }
}

/// Scenario inputs as supplied by the host. Optional members fall back to the
/// documented defaults when the scenario is resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParameters {
    pub total_evs: u32,
    pub public_chargers: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ev_growth: Option<f64>,
    pub two_wheeler_share: f64,
    pub peak_charging_share: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_priority: Option<PolicyPriority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment_appetite: Option<InvestmentAppetite>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regulatory_flexibility: Option<RegulatoryFlexibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stakeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charger_types: Option<ChargerMix>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solar_integration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub v2g_adoption: Option<f64>,
    #[serde(default)]
    pub fleet_mix: Vec<FleetSegment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urban_rural_split: Option<UrbanRuralSplit>,
}

impl ScenarioParameters {
    /// Minimal scenario; every optional member is left to its default.
    pub fn new(
        total_evs: u32,
        public_chargers: u32,
        two_wheeler_share: f64,
        peak_charging_share: f64,
    ) -> Self {
        Self {
            total_evs,
            public_chargers,
            ev_growth: None,
            two_wheeler_share,
            peak_charging_share,
            policy_priority: None,
            investment_appetite: None,
            regulatory_flexibility: None,
            stakeholder: None,
            charger_types: None,
            solar_integration: None,
            v2g_adoption: None,
            fleet_mix: Vec::new(),
            urban_rural_split: None,
        }
    }

    /// Current national baseline used for "compare with today" views.
    pub fn baseline() -> Self {
        Self {
            total_evs: 12_500,
            public_chargers: 156,
            ev_growth: Some(20.0),
            two_wheeler_share: 52.0,
            peak_charging_share: 50.0,
            policy_priority: Some(PolicyPriority::BalancedGrowth),
            investment_appetite: Some(InvestmentAppetite::Moderate),
            regulatory_flexibility: Some(RegulatoryFlexibility::Adaptive),
            stakeholder: Some("National Government / MININFRA".to_string()),
            charger_types: Some(ChargerMix::Balanced),
            solar_integration: Some(15.0),
            v2g_adoption: Some(5.0),
            fleet_mix: vec![FleetSegment::EMotos, FleetSegment::Taxis],
            urban_rural_split: None,
        }
    }

    /// Boundary-layer normalisation: percentages into [0, 100], at least one charger.
    pub fn clamped(mut self) -> Self {
        self.public_chargers = self.public_chargers.max(1);
        self.two_wheeler_share = clamp_percent(self.two_wheeler_share);
        self.peak_charging_share = clamp_percent(self.peak_charging_share);
        self.ev_growth = self.ev_growth.map(clamp_percent);
        self.solar_integration = self.solar_integration.map(clamp_percent);
        self.v2g_adoption = self.v2g_adoption.map(clamp_percent);
        self.urban_rural_split = self
            .urban_rural_split
            .map(|split| UrbanRuralSplit(clamp_percent(split.0), clamp_percent(split.1)));
        self
    }

    pub fn resolve(&self) -> ResolvedScenario<'_> {
        ResolvedScenario {
            total_evs: self.total_evs,
            public_chargers: self.public_chargers,
            ev_growth: self.ev_growth.unwrap_or(DEFAULT_EV_GROWTH),
            two_wheeler_share: self.two_wheeler_share,
            peak_charging_share: self.peak_charging_share,
            policy_priority: self
                .policy_priority
                .unwrap_or(PolicyPriority::BalancedGrowth),
            investment_appetite: self
                .investment_appetite
                .unwrap_or(InvestmentAppetite::Moderate),
            regulatory_flexibility: self
                .regulatory_flexibility
                .unwrap_or(RegulatoryFlexibility::Adaptive),
            stakeholder: self.stakeholder.as_deref().unwrap_or(""),
            charger_types: self.charger_types.unwrap_or(ChargerMix::Balanced),
            solar_integration: self
                .solar_integration
                .unwrap_or(DEFAULT_SOLAR_INTEGRATION),
            v2g_adoption: self.v2g_adoption.unwrap_or(DEFAULT_V2G_ADOPTION),
            fleet_mix: &self.fleet_mix,
            urban_rural_split: self
                .urban_rural_split
                .unwrap_or(DEFAULT_URBAN_RURAL_SPLIT),
        }
    }
}

/// Scenario view with every default applied.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedScenario<'a> {
    pub total_evs: u32,
    pub public_chargers: u32,
    pub ev_growth: f64,
    pub two_wheeler_share: f64,
    pub peak_charging_share: f64,
    pub policy_priority: PolicyPriority,
    pub investment_appetite: InvestmentAppetite,
    pub regulatory_flexibility: RegulatoryFlexibility,
    pub stakeholder: &'a str,
    pub charger_types: ChargerMix,
    pub solar_integration: f64,
    pub v2g_adoption: f64,
    pub fleet_mix: &'a [FleetSegment],
    pub urban_rural_split: UrbanRuralSplit,
}

impl ResolvedScenario<'_> {
    /// EVs per public charger; the divisor never drops below one.
    pub fn ev_to_charger_ratio(&self) -> f64 {
        f64::from(self.total_evs) / f64::from(self.public_chargers.max(1))
    }
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}
