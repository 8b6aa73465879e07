use serde::{Deserialize, Serialize};

/// Five-step ordinal shared by infrastructure pressure and grid risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    #[serde(rename = "Medium-High")]
    MediumHigh,
    High,
    Critical,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::MediumHigh => "Medium-High",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FinancialViability {
    Poor,
    Moderate,
    Good,
    Excellent,
}

impl FinancialViability {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Poor => "Poor",
            Self::Moderate => "Moderate",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SocialAcceptance {
    Low,
    Medium,
    High,
}

impl SocialAcceptance {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Composite urgency derived from the worse of infrastructure and grid scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UrgencyLevel {
    #[serde(rename = "Low Priority")]
    LowPriority,
    #[serde(rename = "Medium Priority")]
    MediumPriority,
    #[serde(rename = "High Priority")]
    HighPriority,
    Urgent,
    Immediate,
}

impl UrgencyLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::LowPriority => "Low Priority",
            Self::MediumPriority => "Medium Priority",
            Self::HighPriority => "High Priority",
            Self::Urgent => "Urgent",
            Self::Immediate => "Immediate",
        }
    }

    /// Immediate and Urgent scenarios get compressed timelines and a rapid response team.
    pub const fn is_pressing(self) -> bool {
        matches!(self, Self::Immediate | Self::Urgent)
    }
}

/// Dimension that most needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityDimension {
    Infrastructure,
    Grid,
    Finance,
    Social,
}

impl PriorityDimension {
    pub const fn ordered() -> [Self; 4] {
        [Self::Infrastructure, Self::Grid, Self::Finance, Self::Social]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Infrastructure => "infrastructure",
            Self::Grid => "grid",
            Self::Finance => "finance",
            Self::Social => "social",
        }
    }
}
