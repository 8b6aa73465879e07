use super::domain::{RecommendationCategory, RecommendationPriority, RecommendationRecord};

/// Institution keywords matched against the free-form stakeholder string.
/// Each matching entry contributes one record; several may match.
struct StakeholderRule {
    keywords: &'static [&'static str],
    build: fn() -> RecommendationRecord,
}

const STAKEHOLDER_RULES: [StakeholderRule; 4] = [
    StakeholderRule {
        keywords: &["Government", "MININFRA"],
        build: policy_coordination,
    },
    StakeholderRule {
        keywords: &["REG", "Utility"],
        build: grid_modernization,
    },
    StakeholderRule {
        keywords: &["Private Investor", "Developer"],
        build: investment_readiness,
    },
    StakeholderRule {
        keywords: &["Kigali"],
        build: urban_mobility,
    },
];

pub(crate) fn recommendations_for(stakeholder: &str) -> Vec<RecommendationRecord> {
    STAKEHOLDER_RULES
        .iter()
        .filter(|rule| rule.keywords.iter().any(|keyword| stakeholder.contains(keyword)))
        .map(|rule| (rule.build)())
        .collect()
}

fn policy_coordination() -> RecommendationRecord {
    RecommendationRecord::new(
        "Policy Coordination Framework",
        "Coordinate across ministries and agencies for coherent EV policy.",
        "3-12 months",
        RecommendationCategory::Governance,
        RecommendationPriority::High,
    )
}

fn grid_modernization() -> RecommendationRecord {
    RecommendationRecord::new(
        "Grid Modernization Plan",
        "Upgrade distribution network for EV integration.",
        "12-36 months",
        RecommendationCategory::GridInfrastructure,
        RecommendationPriority::High,
    )
}

fn investment_readiness() -> RecommendationRecord {
    RecommendationRecord::new(
        "Investment Readiness Assessment",
        "Evaluate market opportunities and regulatory environment.",
        "1-3 months",
        RecommendationCategory::Financial,
        RecommendationPriority::Medium,
    )
    .with_roi("15-25%")
}

fn urban_mobility() -> RecommendationRecord {
    RecommendationRecord::new(
        "Urban Mobility Integration",
        "Integrate EV charging with urban planning and public transport.",
        "6-24 months",
        RecommendationCategory::UrbanPlanning,
        RecommendationPriority::Medium,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stakeholder_matches_nothing() {
        assert!(recommendations_for("").is_empty());
    }

    #[test]
    fn utility_acronym_matches_case_sensitively() {
        let records = recommendations_for("Rwanda Energy Group (REG)");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Grid Modernization Plan");

        assert!(recommendations_for("regional office").is_empty());
    }

    #[test]
    fn several_rules_can_match_one_stakeholder() {
        let records = recommendations_for("City of Kigali Government Developer");
        let titles: Vec<_> = records.iter().map(|record| record.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Policy Coordination Framework",
                "Investment Readiness Assessment",
                "Urban Mobility Integration",
            ]
        );
    }
}
