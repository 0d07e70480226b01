//! Situation severity scoring on the 0-100 point scale.
//!
//! The life-threat lookup dominates: Critical alone is worth 100 points.
//! The other factors are additive on top, so the raw sum can exceed 100.
//! `SeverityBreakdown::total` reports the clamped score while `raw_total`
//! preserves the unclamped sum for inspection.

use crate::core::records::{SituationAssessment, ThreatLevel};
use crate::core::Score0To100;
use crate::scoring::unit;
use serde::{Deserialize, Serialize};

const CASUALTY_SATURATION: f64 = 100.0;
const DISPLACEMENT_SATURATION: f64 = 10_000.0;

const CASUALTY_WEIGHT: f64 = 30.0;
const DISPLACEMENT_WEIGHT: f64 = 20.0;
const INFRASTRUCTURE_WEIGHT: f64 = 15.0;
const DISEASE_RISK_WEIGHT: f64 = 10.0;
const WATER_ACCESS_WEIGHT: f64 = 5.0;

/// Points contributed by the immediate life threat level.
pub fn threat_level_points(level: ThreatLevel) -> f64 {
    match level {
        ThreatLevel::None => 0.0,
        ThreatLevel::Low => 20.0,
        ThreatLevel::Medium => 40.0,
        ThreatLevel::High => 70.0,
        ThreatLevel::Critical => 100.0,
    }
}

/// Point contribution of each severity factor.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct SeverityBreakdown {
    pub life_threat: f64,
    pub casualties: f64,
    pub displacement: f64,
    pub infrastructure: f64,
    pub disease_risk: f64,
    pub water_access: f64,
}

impl SeverityBreakdown {
    /// Named components, in weight order.
    pub fn components(&self) -> [(&'static str, f64); 6] {
        [
            ("life_threat", self.life_threat),
            ("casualties", self.casualties),
            ("displacement", self.displacement),
            ("infrastructure", self.infrastructure),
            ("disease_risk", self.disease_risk),
            ("water_access", self.water_access),
        ]
    }

    /// Unclamped sum of the components. Can exceed 100 when a Critical
    /// threat level combines with heavy casualties or displacement.
    pub fn raw_total(&self) -> f64 {
        self.components().iter().map(|(_, v)| v).sum()
    }

    /// Severity on the 0-100 scale the decision thresholds are calibrated
    /// against.
    pub fn total(&self) -> Score0To100 {
        Score0To100::new(self.raw_total())
    }
}

/// Score the verified situation.
pub fn severity_score(assessment: &SituationAssessment) -> SeverityBreakdown {
    SeverityBreakdown {
        life_threat: threat_level_points(assessment.immediate_life_threat_level),
        casualties: unit(assessment.confirmed_casualties as f64 / CASUALTY_SATURATION)
            * CASUALTY_WEIGHT,
        displacement: unit(assessment.displacement_numbers as f64 / DISPLACEMENT_SATURATION)
            * DISPLACEMENT_WEIGHT,
        infrastructure: unit(assessment.infrastructure_damage_verified) * INFRASTRUCTURE_WEIGHT,
        disease_risk: unit(assessment.disease_outbreak_risk) * DISEASE_RISK_WEIGHT,
        water_access: unit(1.0 - assessment.water_access_impact) * WATER_ACCESS_WEIGHT,
    }
}
