//! Director approval scoring on the 0-100 point scale.
//!
//! This is where organizational constraints come in: mandate fit, funding
//! coverage, staff risk, donor appetite. Nine weighted factors; the
//! weights sum to 100, so a case that is perfect on every axis scores
//! exactly 100.

use crate::core::records::ApprovalFactors;
use crate::core::Score0To100;
use crate::scoring::unit;
use serde::{Deserialize, Serialize};

const MANDATE_WEIGHT: f64 = 20.0;
const SUCCESS_WEIGHT: f64 = 15.0;
const FUNDING_WEIGHT: f64 = 15.0;
const SECURITY_WEIGHT: f64 = 15.0;
const REPUTATION_WEIGHT: f64 = 10.0;
const DONOR_WEIGHT: f64 = 10.0;
const MEDIA_WEIGHT: f64 = 5.0;
const COMPLEXITY_WEIGHT: f64 = 5.0;
const POLITICAL_WEIGHT: f64 = 5.0;

/// Media attention level at which the factor saturates.
const MEDIA_SATURATION: f64 = 50.0;

/// Point contribution of each approval factor.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ApprovalBreakdown {
    pub mandate_alignment: f64,
    pub success_probability: f64,
    pub funding_available: f64,
    pub security_risk: f64,
    pub reputation_risk: f64,
    pub donor_interest: f64,
    pub media_attention: f64,
    pub operational_complexity: f64,
    pub political_sensitivity: f64,
}

impl ApprovalBreakdown {
    /// Named components, in weight order.
    pub fn components(&self) -> [(&'static str, f64); 9] {
        [
            ("mandate_alignment", self.mandate_alignment),
            ("success_probability", self.success_probability),
            ("funding_available", self.funding_available),
            ("security_risk", self.security_risk),
            ("reputation_risk", self.reputation_risk),
            ("donor_interest", self.donor_interest),
            ("media_attention", self.media_attention),
            ("operational_complexity", self.operational_complexity),
            ("political_sensitivity", self.political_sensitivity),
        ]
    }

    /// Approval score on the 0-100 scale.
    pub fn total(&self) -> Score0To100 {
        Score0To100::new(self.components().iter().map(|(_, v)| v).sum())
    }
}

/// Fraction of the estimated cost covered by available funding.
///
/// A non-positive cost estimate is treated as unfunded rather than
/// dividing by zero: a case without a cost figure has not made its
/// financial argument yet.
pub fn funding_ratio(factors: &ApprovalFactors) -> f64 {
    if factors.total_estimated_cost_usd <= 0.0 {
        return 0.0;
    }
    unit(factors.available_funding() / factors.total_estimated_cost_usd)
}

/// Score the director approval factors.
pub fn approval_score(factors: &ApprovalFactors) -> ApprovalBreakdown {
    ApprovalBreakdown {
        mandate_alignment: unit(factors.organizational_mandate_alignment) * MANDATE_WEIGHT,
        success_probability: unit(factors.success_probability) * SUCCESS_WEIGHT,
        funding_available: funding_ratio(factors) * FUNDING_WEIGHT,
        security_risk: unit(1.0 - factors.security_risk_to_staff) * SECURITY_WEIGHT,
        reputation_risk: unit(1.0 - factors.reputation_risk_assessment) * REPUTATION_WEIGHT,
        donor_interest: unit(factors.donor_interest_likelihood) * DONOR_WEIGHT,
        media_attention: unit(factors.media_attention_level as f64 / MEDIA_SATURATION)
            * MEDIA_WEIGHT,
        operational_complexity: unit(1.0 - factors.operational_complexity) * COMPLEXITY_WEIGHT,
        political_sensitivity: unit(1.0 - factors.political_sensitivity_score) * POLITICAL_WEIGHT,
    }
}
