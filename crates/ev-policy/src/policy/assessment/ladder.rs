use super::levels::{FinancialViability, RiskLevel, SocialAcceptance, UrgencyLevel};
use crate::policy::scenario::{ChargerMix, InvestmentAppetite, RegulatoryFlexibility};

/// Values strictly above `above` map to `value`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rung<T> {
    pub above: f64,
    pub value: T,
}

/// Threshold table scanned top to bottom; the first rung that matches wins and
/// anything below every rung falls to `floor`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Ladder<T: 'static> {
    pub rungs: &'static [Rung<T>],
    pub floor: T,
}

impl<T: Copy + 'static> Ladder<T> {
    pub(crate) fn classify(&self, score: f64) -> T {
        self.rungs
            .iter()
            .find(|rung| score > rung.above)
            .map(|rung| rung.value)
            .unwrap_or(self.floor)
    }
}

/// EV-to-charger ratio to (pressure, score).
pub(crate) const INFRASTRUCTURE_PRESSURE: Ladder<(RiskLevel, f64)> = Ladder {
    rungs: &[
        Rung {
            above: 200.0,
            value: (RiskLevel::Critical, 1.0),
        },
        Rung {
            above: 150.0,
            value: (RiskLevel::High, 0.8),
        },
        Rung {
            above: 100.0,
            value: (RiskLevel::MediumHigh, 0.6),
        },
        Rung {
            above: 50.0,
            value: (RiskLevel::Medium, 0.4),
        },
    ],
    floor: (RiskLevel::Low, 0.2),
};

/// Peak-charging share (percent) to base grid score.
pub(crate) const PEAK_CHARGING_BASE: Ladder<f64> = Ladder {
    rungs: &[
        Rung {
            above: 70.0,
            value: 0.4,
        },
        Rung {
            above: 50.0,
            value: 0.3,
        },
        Rung {
            above: 30.0,
            value: 0.2,
        },
    ],
    floor: 0.1,
};

pub(crate) const GRID_RISK: Ladder<RiskLevel> = Ladder {
    rungs: &[
        Rung {
            above: 0.6,
            value: RiskLevel::Critical,
        },
        Rung {
            above: 0.45,
            value: RiskLevel::High,
        },
        Rung {
            above: 0.3,
            value: RiskLevel::MediumHigh,
        },
        Rung {
            above: 0.15,
            value: RiskLevel::Medium,
        },
    ],
    floor: RiskLevel::Low,
};

pub(crate) const FINANCIAL_VIABILITY: Ladder<FinancialViability> = Ladder {
    rungs: &[
        Rung {
            above: 0.7,
            value: FinancialViability::Excellent,
        },
        Rung {
            above: 0.5,
            value: FinancialViability::Good,
        },
        Rung {
            above: 0.3,
            value: FinancialViability::Moderate,
        },
    ],
    floor: FinancialViability::Poor,
};

/// Two-wheeler share (percent) to social acceptance bonus.
pub(crate) const TWO_WHEELER_BONUS: Ladder<f64> = Ladder {
    rungs: &[
        Rung {
            above: 60.0,
            value: 0.2,
        },
        Rung {
            above: 40.0,
            value: 0.1,
        },
    ],
    floor: 0.0,
};

pub(crate) const SOCIAL_ACCEPTANCE: Ladder<SocialAcceptance> = Ladder {
    rungs: &[
        Rung {
            above: 0.7,
            value: SocialAcceptance::High,
        },
        Rung {
            above: 0.5,
            value: SocialAcceptance::Medium,
        },
    ],
    floor: SocialAcceptance::Low,
};

pub(crate) const URGENCY: Ladder<UrgencyLevel> = Ladder {
    rungs: &[
        Rung {
            above: 0.8,
            value: UrgencyLevel::Immediate,
        },
        Rung {
            above: 0.6,
            value: UrgencyLevel::Urgent,
        },
        Rung {
            above: 0.4,
            value: UrgencyLevel::HighPriority,
        },
        Rung {
            above: 0.2,
            value: UrgencyLevel::MediumPriority,
        },
    ],
    floor: UrgencyLevel::LowPriority,
};

/// Unrecognized labels take the neutral 0.5 weight.
pub(crate) const fn investment_weight(appetite: InvestmentAppetite) -> f64 {
    match appetite {
        InvestmentAppetite::Conservative => 0.2,
        InvestmentAppetite::Moderate => 0.5,
        InvestmentAppetite::Aggressive => 0.7,
        InvestmentAppetite::Transformative => 0.9,
        InvestmentAppetite::Unrecognized => 0.5,
    }
}

pub(crate) const fn regulatory_weight(flexibility: RegulatoryFlexibility) -> f64 {
    match flexibility {
        RegulatoryFlexibility::Traditional => 0.2,
        RegulatoryFlexibility::Adaptive => 0.5,
        RegulatoryFlexibility::InnovationFriendly => 0.7,
        RegulatoryFlexibility::Sandbox => 0.9,
        RegulatoryFlexibility::Unrecognized => 0.5,
    }
}

pub(crate) const fn charger_grid_penalty(mix: ChargerMix) -> f64 {
    match mix {
        ChargerMix::TwentyKilowattFocus => 0.2,
        ChargerMix::FastChargeHeavy => 0.3,
        ChargerMix::TenKilowattFocus | ChargerMix::Balanced | ChargerMix::Unrecognized => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_thresholds_are_exclusive() {
        assert_eq!(INFRASTRUCTURE_PRESSURE.classify(200.0).0, RiskLevel::High);
        assert_eq!(INFRASTRUCTURE_PRESSURE.classify(200.1).0, RiskLevel::Critical);
        assert_eq!(INFRASTRUCTURE_PRESSURE.classify(50.0).0, RiskLevel::Low);
        assert_eq!(PEAK_CHARGING_BASE.classify(50.0), 0.2);
        assert_eq!(FINANCIAL_VIABILITY.classify(0.5), FinancialViability::Moderate);
        assert_eq!(URGENCY.classify(0.4), UrgencyLevel::MediumPriority);
    }

    #[test]
    fn negative_and_nan_scores_fall_to_floor() {
        assert_eq!(GRID_RISK.classify(-0.2), RiskLevel::Low);
        assert_eq!(GRID_RISK.classify(f64::NAN), RiskLevel::Low);
        assert_eq!(SOCIAL_ACCEPTANCE.classify(f64::NAN), SocialAcceptance::Low);
    }
}
