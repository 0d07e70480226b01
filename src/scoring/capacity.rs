//! Local support capacity scoring.
//!
//! Six of the assessed capacities carry decision weight; religious and
//! diaspora support and infrastructure usability are recorded for context
//! but do not enter the mean.

use crate::core::records::LocalSupportAssessment;
use crate::core::Score0To1;
use crate::scoring::unit;

/// The six capacities that enter the score, in display order.
pub fn capacity_components(assessment: &LocalSupportAssessment) -> [(&'static str, f64); 6] {
    [
        ("government_response", unit(assessment.government_response_capacity)),
        ("local_ngo", unit(assessment.local_ngo_capacity)),
        ("community_self_help", unit(assessment.community_self_help_capacity)),
        ("private_sector", unit(assessment.private_sector_involvement)),
        ("local_medical", unit(assessment.local_medical_capacity)),
        ("local_food_supply", unit(assessment.local_food_supply_capacity)),
    ]
}

/// Mean of the six weighted capacities.
pub fn local_capacity_score(assessment: &LocalSupportAssessment) -> Score0To1 {
    let components = capacity_components(assessment);
    let sum: f64 = components.iter().map(|(_, v)| v).sum();
    Score0To1::new(sum / components.len() as f64)
}
