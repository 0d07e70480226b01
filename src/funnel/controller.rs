//! The funnel controller: a forward-only state machine over the ten
//! stages.
//!
//! One controller per disaster case. The controller performs no data
//! generation; every record arrives from an external collaborator. A
//! halting decision leaves the stage pointer in place, and the caller may
//! re-submit a corrected record for the same stage.

use crate::config::FunnelThresholds;
use crate::core::{Decision, Error, FunnelStage, Result, StageOutcome, StageRecord};
use crate::funnel::{build_policies, StagePolicy};
use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub struct FunnelController {
    thresholds: FunnelThresholds,
    policies: Vec<Box<dyn StagePolicy>>,
    current: FunnelStage,
    records: BTreeMap<FunnelStage, StageRecord>,
    history: Vector<StageOutcome>,
    complete: bool,
}

impl Default for FunnelController {
    fn default() -> Self {
        Self::new()
    }
}

impl FunnelController {
    /// Controller with the calibrated default thresholds.
    pub fn new() -> Self {
        Self::with_thresholds(FunnelThresholds::default())
    }

    pub fn with_thresholds(thresholds: FunnelThresholds) -> Self {
        let policies = build_policies(&thresholds);
        Self {
            thresholds,
            policies,
            current: FunnelStage::DisasterOccurs,
            records: BTreeMap::new(),
            history: Vector::new(),
            complete: false,
        }
    }

    pub fn current_stage(&self) -> FunnelStage {
        self.current
    }

    /// Whether the run reached the end of impact reporting.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// All records submitted so far, keyed by stage. Read-only; records
    /// are only replaced wholesale when a stage is re-attempted.
    pub fn records(&self) -> &BTreeMap<FunnelStage, StageRecord> {
        &self.records
    }

    /// Every decision taken this run, in order.
    pub fn history(&self) -> &Vector<StageOutcome> {
        &self.history
    }

    pub fn last_decision(&self) -> Option<&Decision> {
        self.history.last().map(|outcome| &outcome.decision)
    }

    /// Submit the current stage's record and evaluate it.
    ///
    /// Errors if the run is already complete or the record belongs to a
    /// different stage. An advancing decision moves the stage pointer
    /// forward; a halt leaves it where it is.
    pub fn advance(&mut self, record: StageRecord) -> Result<Decision> {
        if self.complete {
            return Err(Error::RunComplete);
        }
        if record.stage() != self.current {
            return Err(Error::StageMismatch {
                current: self.current,
                submitted: record.stage(),
            });
        }

        let policy = self
            .policies
            .iter()
            .find(|p| p.stage() == self.current)
            .ok_or_else(|| {
                Error::Validation(format!("No policy registered for stage: {}", self.current))
            })?;

        let decision = policy.decide(&record);
        self.records.insert(self.current, record);
        self.history.push_back(StageOutcome {
            stage: self.current,
            decision: decision.clone(),
            recorded_at: Utc::now(),
        });

        if decision.advanced {
            match self.current.next() {
                Some(next) => {
                    log::debug!("Funnel advanced: {} -> {}", self.current, next);
                    self.current = next;
                }
                None => {
                    log::debug!("Funnel complete at {}", self.current);
                    self.complete = true;
                }
            }
        } else {
            log::debug!("Funnel halted at {}: {}", self.current, decision.message);
        }

        Ok(decision)
    }

    /// Discard all records and decisions and return to the first stage.
    pub fn reset(&mut self) {
        self.current = FunnelStage::DisasterOccurs;
        self.records.clear();
        self.history.clear();
        self.complete = false;
    }

    /// Snapshot the run for reporting.
    pub fn report(&self, case_id: impl Into<String>) -> FunnelReport {
        FunnelReport {
            case_id: case_id.into(),
            generated_at: Utc::now(),
            final_stage: self.current,
            complete: self.complete,
            outcomes: self.history.iter().cloned().collect(),
            records: self.records.clone(),
        }
    }

    pub fn thresholds(&self) -> &FunnelThresholds {
        &self.thresholds
    }
}

/// Serializable snapshot of one funnel run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FunnelReport {
    pub case_id: String,
    pub generated_at: DateTime<Utc>,
    pub final_stage: FunnelStage,
    pub complete: bool,
    pub outcomes: Vec<StageOutcome>,
    pub records: BTreeMap<FunnelStage, StageRecord>,
}

impl FunnelReport {
    /// Stages evaluated this run.
    pub fn stages_processed(&self) -> usize {
        self.outcomes.len()
    }

    /// The last decision of the run, if any stage was evaluated.
    pub fn final_decision(&self) -> Option<&Decision> {
        self.outcomes.last().map(|outcome| &outcome.decision)
    }
}
