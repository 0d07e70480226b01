//! Detection probability for a disaster occurrence.
//!
//! Some disasters are not immediately detectable: a remote event with
//! wrecked infrastructure and no media nearby can go unreported for days.
//! The probability is the mean of five equally weighted factors.

use crate::core::records::DisasterEvent;
use crate::core::Score0To1;
use crate::scoring::unit;
use serde::{Deserialize, Serialize};

/// Population at which density no longer raises detection probability.
const POPULATION_SATURATION: f64 = 10_000.0;

/// The five equally weighted detection factors.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct DetectionFactors {
    pub magnitude: f64,
    pub population_density: f64,
    pub accessibility: f64,
    pub infrastructure: f64,
    pub media_presence: f64,
}

impl DetectionFactors {
    /// Named components, in display order.
    pub fn components(&self) -> [(&'static str, f64); 5] {
        [
            ("magnitude", self.magnitude),
            ("population_density", self.population_density),
            ("accessibility", self.accessibility),
            ("infrastructure", self.infrastructure),
            ("media_presence", self.media_presence),
        ]
    }

    /// Mean of the five factors.
    pub fn probability(&self) -> Score0To1 {
        let components = self.components();
        let sum: f64 = components.iter().map(|(_, v)| v).sum();
        Score0To1::new(sum / components.len() as f64)
    }
}

/// Compute the detection factors for an event.
pub fn detection_probability(event: &DisasterEvent) -> DetectionFactors {
    DetectionFactors {
        magnitude: unit(event.magnitude / 10.0),
        population_density: unit(event.affected_population as f64 / POPULATION_SATURATION),
        accessibility: unit(event.accessibility),
        infrastructure: unit(1.0 - event.infrastructure_damage),
        media_presence: unit(event.media_presence),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::records::{DisasterType, Location, SecurityLevel};
    use chrono::Utc;

    fn event(magnitude: f64, population: u64, damage: f64, access: f64, media: f64) -> DisasterEvent {
        DisasterEvent {
            event_id: "DST_0001".to_string(),
            disaster_type: DisasterType::Earthquake,
            location: Location {
                country: "Philippines".to_string(),
                province: "Leyte".to_string(),
                district: "Tacloban".to_string(),
                coordinates: (11.25, 125.0),
            },
            magnitude,
            affected_population: population,
            infrastructure_damage: damage,
            casualty_estimate: 120,
            economic_impact_usd: 4.0e6,
            environmental_impact: 0.3,
            accessibility: access,
            security_level: SecurityLevel::ModerateRisk,
            media_presence: media,
            time_of_occurrence: Utc::now(),
            duration_estimate_hours: 12,
        }
    }

    #[test]
    fn probability_is_mean_of_factors() {
        let factors = detection_probability(&event(8.0, 5_000, 0.4, 0.7, 0.5));
        // (0.8 + 0.5 + 0.7 + 0.6 + 0.5) / 5
        assert!((factors.probability().value() - 0.62).abs() < 1e-10);
    }

    #[test]
    fn population_factor_saturates_at_ten_thousand() {
        let factors = detection_probability(&event(5.0, 80_000, 0.2, 0.5, 0.5));
        assert_eq!(factors.population_density, 1.0);
    }

    #[test]
    fn out_of_range_input_stays_bounded() {
        let factors = detection_probability(&event(14.0, 1_000, 1.6, -0.3, 2.0));
        let p = factors.probability().value();
        assert!((0.0..=1.0).contains(&p));
        assert_eq!(factors.magnitude, 1.0);
        assert_eq!(factors.infrastructure, 0.0);
        assert_eq!(factors.accessibility, 0.0);
    }

    #[test]
    fn scoring_is_deterministic() {
        let e = event(6.5, 3_000, 0.5, 0.6, 0.4);
        assert_eq!(detection_probability(&e), detection_probability(&e));
    }
}
