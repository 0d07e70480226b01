//! Verification confidence scoring.
//!
//! Eight weighted evidence channels combine into a confidence on [0, 1].
//! Boolean channels contribute their full weight or nothing; fractional
//! channels contribute proportionally. The channel weights sum to 1.10,
//! so a case confirmed on every channel overshoots unity: `raw_total`
//! preserves the exact component sum, `total` reports the clamped
//! confidence the thresholds are calibrated against.

use crate::core::records::VerificationData;
use crate::core::Score0To1;
use crate::scoring::unit;
use serde::{Deserialize, Serialize};

const SATELLITE_IMAGERY_WEIGHT: f64 = 0.25;
const SATELLITE_DAMAGE_WEIGHT: f64 = 0.20;
const SOURCE_CORRELATION_WEIGHT: f64 = 0.20;
const GOVERNMENT_CONFIRM_WEIGHT: f64 = 0.15;
const MEDIA_COVERAGE_WEIGHT: f64 = 0.10;
const SOCIAL_VERIFICATION_WEIGHT: f64 = 0.05;
const EXPERT_ANALYSIS_WEIGHT: f64 = 0.10;
const PATTERN_MATCH_WEIGHT: f64 = 0.05;

/// Weighted contribution of each evidence channel.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct VerificationBreakdown {
    pub satellite_imagery: f64,
    pub satellite_damage: f64,
    pub source_correlation: f64,
    pub government_confirm: f64,
    pub media_coverage: f64,
    pub social_verification: f64,
    pub expert_analysis: f64,
    pub pattern_match: f64,
}

impl VerificationBreakdown {
    /// Named components, in weight order.
    pub fn components(&self) -> [(&'static str, f64); 8] {
        [
            ("satellite_imagery", self.satellite_imagery),
            ("satellite_damage", self.satellite_damage),
            ("source_correlation", self.source_correlation),
            ("government_confirm", self.government_confirm),
            ("media_coverage", self.media_coverage),
            ("social_verification", self.social_verification),
            ("expert_analysis", self.expert_analysis),
            ("pattern_match", self.pattern_match),
        ]
    }

    /// Exact sum of the eight stored components. Exceeds 1.0 only when
    /// nearly every channel confirms at once.
    pub fn raw_total(&self) -> f64 {
        self.components().iter().map(|(_, v)| v).sum()
    }

    /// Verification confidence on the unit interval.
    pub fn total(&self) -> Score0To1 {
        Score0To1::new(self.raw_total())
    }
}

fn gate(present: bool, weight: f64) -> f64 {
    if present {
        weight
    } else {
        0.0
    }
}

/// Score the available verification evidence.
pub fn verification_score(data: &VerificationData) -> VerificationBreakdown {
    VerificationBreakdown {
        satellite_imagery: gate(data.satellite_imagery_available, SATELLITE_IMAGERY_WEIGHT),
        satellite_damage: unit(data.satellite_damage_assessment) * SATELLITE_DAMAGE_WEIGHT,
        source_correlation: unit(data.multiple_source_correlation) * SOURCE_CORRELATION_WEIGHT,
        government_confirm: gate(data.government_confirmation, GOVERNMENT_CONFIRM_WEIGHT),
        media_coverage: gate(data.international_media_coverage, MEDIA_COVERAGE_WEIGHT),
        social_verification: unit(data.social_media_verification_score)
            * SOCIAL_VERIFICATION_WEIGHT,
        expert_analysis: gate(data.expert_analysis_available, EXPERT_ANALYSIS_WEIGHT),
        pattern_match: unit(data.historical_pattern_match) * PATTERN_MATCH_WEIGHT,
    }
}
