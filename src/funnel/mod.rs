//! The decision funnel: stage policies and the controller that sequences
//! them.
//!
//! Each stage implements [`StagePolicy`], a small capability set the
//! controller drives polymorphically instead of a per-stage dispatch
//! chain. A policy validates that a record belongs to its stage,
//! optionally scores it, and turns it into a [`Decision`].

pub mod controller;
pub mod policies;

use crate::core::{Decision, FunnelStage, StageRecord};

pub use controller::{FunnelController, FunnelReport};
pub use policies::build_policies;

/// Capability set implemented once per funnel stage.
pub trait StagePolicy {
    /// The stage this policy evaluates.
    fn stage(&self) -> FunnelStage;

    /// Whether the record belongs to this stage.
    fn accepts(&self, record: &StageRecord) -> bool {
        record.stage() == self.stage()
    }

    /// The stage score, for stages that compute one. `None` for stages
    /// decided on counts or explicit signals, and for records that do not
    /// belong to this stage.
    fn score(&self, record: &StageRecord) -> Option<f64>;

    /// Evaluate the record into an advance/halt decision with rationale.
    fn decide(&self, record: &StageRecord) -> Decision;
}
