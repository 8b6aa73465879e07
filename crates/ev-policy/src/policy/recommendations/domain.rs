use serde::{Deserialize, Serialize};

/// Recommendation priority; drives output ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RecommendationPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl RecommendationPriority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    pub const fn rank(self) -> u8 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Impact {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Dashboard grouping a recommendation can surface under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationGroup {
    GridAndEnergy,
    Infrastructure,
    Financial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationCategory {
    Infrastructure,
    #[serde(rename = "Grid Management")]
    GridManagement,
    #[serde(rename = "Grid Infrastructure")]
    GridInfrastructure,
    #[serde(rename = "Fleet Strategy")]
    FleetStrategy,
    #[serde(rename = "Climate & Environment")]
    ClimateAndEnvironment,
    Financial,
    Governance,
    #[serde(rename = "Urban Planning")]
    UrbanPlanning,
}

impl RecommendationCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Infrastructure => "Infrastructure",
            Self::GridManagement => "Grid Management",
            Self::GridInfrastructure => "Grid Infrastructure",
            Self::FleetStrategy => "Fleet Strategy",
            Self::ClimateAndEnvironment => "Climate & Environment",
            Self::Financial => "Financial",
            Self::Governance => "Governance",
            Self::UrbanPlanning => "Urban Planning",
        }
    }

    pub const fn groups(self) -> &'static [RecommendationGroup] {
        match self {
            Self::Infrastructure => &[RecommendationGroup::Infrastructure],
            Self::GridManagement => &[RecommendationGroup::GridAndEnergy],
            Self::GridInfrastructure => &[
                RecommendationGroup::GridAndEnergy,
                RecommendationGroup::Infrastructure,
            ],
            Self::Financial => &[RecommendationGroup::Financial],
            Self::FleetStrategy
            | Self::ClimateAndEnvironment
            | Self::Governance
            | Self::UrbanPlanning => &[],
        }
    }

    pub fn belongs_to(self, group: RecommendationGroup) -> bool {
        self.groups().contains(&group)
    }
}

/// One policy recommendation. Built fresh on every generation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub title: String,
    pub description: String,
    pub timeframe: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<Impact>,
    pub category: RecommendationCategory,
    pub priority: RecommendationPriority,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stakeholders: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kpi: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mitigation_strategy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation_level: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_estimate: Option<String>,
}

impl RecommendationRecord {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        timeframe: impl Into<String>,
        category: RecommendationCategory,
        priority: RecommendationPriority,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            timeframe: timeframe.into(),
            impact: None,
            category,
            priority,
            stakeholders: Vec::new(),
            estimated_cost: None,
            kpi: None,
            actions: Vec::new(),
            mitigation_strategy: None,
            roi: None,
            implementation_level: None,
            budget_estimate: None,
        }
    }

    pub fn with_impact(mut self, impact: Impact) -> Self {
        self.impact = Some(impact);
        self
    }

    pub fn with_stakeholders(mut self, stakeholders: &[&str]) -> Self {
        self.stakeholders = stakeholders.iter().map(|name| name.to_string()).collect();
        self
    }

    pub fn with_cost(mut self, cost: impl Into<String>) -> Self {
        self.estimated_cost = Some(cost.into());
        self
    }

    pub fn with_kpi(mut self, kpi: impl Into<String>) -> Self {
        self.kpi = Some(kpi.into());
        self
    }

    pub fn with_actions<I, S>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.actions = actions.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_mitigation(mut self, mitigation: impl Into<String>) -> Self {
        self.mitigation_strategy = Some(mitigation.into());
        self
    }

    pub fn with_roi(mut self, roi: impl Into<String>) -> Self {
        self.roi = Some(roi.into());
        self
    }
}

/// Recommendations ordered by descending priority rank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationSet {
    records: Vec<RecommendationRecord>,
}

impl RecommendationSet {
    /// Stable sort: equal ranks keep their rule-evaluation order.
    pub fn ranked(mut records: Vec<RecommendationRecord>) -> Self {
        records.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank()));
        Self { records }
    }

    pub fn records(&self) -> &[RecommendationRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<RecommendationRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecommendationRecord> {
        self.records.iter()
    }

    /// High-priority records for the "act now" view, capped at five.
    pub fn priority_actions(&self) -> Vec<&RecommendationRecord> {
        self.records
            .iter()
            .filter(|record| record.priority == RecommendationPriority::High)
            .take(5)
            .collect()
    }

    pub fn in_group(&self, group: RecommendationGroup) -> Vec<&RecommendationRecord> {
        self.records
            .iter()
            .filter(|record| record.category.belongs_to(group))
            .collect()
    }

    pub fn find(&self, title: &str) -> Option<&RecommendationRecord> {
        self.records.iter().find(|record| record.title == title)
    }
}

impl<'a> IntoIterator for &'a RecommendationSet {
    type Item = &'a RecommendationRecord;
    type IntoIter = std::slice::Iter<'a, RecommendationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_and_priorities_serialize_as_labels() {
        for category in [
            RecommendationCategory::GridManagement,
            RecommendationCategory::ClimateAndEnvironment,
            RecommendationCategory::UrbanPlanning,
            RecommendationCategory::Financial,
        ] {
            assert_eq!(
                serde_json::to_value(category).expect("serializes"),
                category.label()
            );
        }
        assert_eq!(
            serde_json::to_value(RecommendationPriority::Critical).expect("serializes"),
            "Critical"
        );
    }
}
