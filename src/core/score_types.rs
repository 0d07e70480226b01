//! Type-safe score scales for the decision engine.
//!
//! Two scales run through the funnel: detection probability, verification
//! confidence, data completeness, and local capacity are fractions on
//! [0, 1]; severity and director approval are points on [0, 100]. Encoding
//! the scale in the type prevents a capacity fraction from being compared
//! against a severity threshold by accident.
//!
//! Constructors clamp, so a caller handing the engine an out-of-range
//! fraction still gets a bounded score back.

use serde::{Deserialize, Serialize};

/// Score on the normalized 0-1 scale.
///
/// Used for detection probability, verification confidence, data
/// completeness, and local capacity.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Score0To1(f64);

impl Score0To1 {
    /// Create a new score, clamping to [0.0, 1.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the raw score value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Denormalize to the 0-100 scale by multiplying by 100.
    pub fn denormalize(self) -> Score0To100 {
        Score0To100(self.0 * 100.0)
    }
}

/// Score on the 0-100 scale.
///
/// Used for situation severity and director approval, where the decision
/// thresholds are calibrated in whole points.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Score0To100(f64);

impl Score0To100 {
    /// Create a new score, clamping to [0.0, 100.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 100.0))
    }

    /// Get the raw score value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Normalize to the 0-1 scale by dividing by 100.
    pub fn normalize(self) -> Score0To1 {
        Score0To1(self.0 / 100.0)
    }
}

impl std::fmt::Display for Score0To1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl std::fmt::Display for Score0To100 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn fraction_always_in_bounds(value in -10.0..10.0f64) {
            let score = Score0To1::new(value);
            assert!(score.value() >= 0.0 && score.value() <= 1.0);
        }

        #[test]
        fn points_always_in_bounds(value in -1000.0..1000.0f64) {
            let score = Score0To100::new(value);
            assert!(score.value() >= 0.0 && score.value() <= 100.0);
        }

        #[test]
        fn roundtrip_conversion_exact(value in 0.0..100.0f64) {
            let original = Score0To100::new(value);
            let roundtrip = original.normalize().denormalize();
            assert!((original.value() - roundtrip.value()).abs() < 1e-10);
        }
    }
}
