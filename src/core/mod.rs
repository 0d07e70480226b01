pub mod errors;
pub mod records;
pub mod score_types;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use errors::{Error, Result};
pub use records::{
    ApprovalFactors, CostBenefit, DetectionSignal, DisasterEvent, DisasterReport, DisasterType,
    ImpactMeasurement, LocalSupportAssessment, Location, MedicalNeeds, Milestone,
    MobilizationPlan, MultiSourceData, NeedsAnalysis, RankedNeed, ReportedSeverity,
    SecurityLevel, SentimentBreakdown, SituationAssessment, SourceDocument, SourceType,
    StageRecord, ThreatLevel, VerificationData,
};
pub use score_types::{Score0To1, Score0To100};

/// The ten ordered stages of the response decision funnel.
///
/// The stage pointer only ever moves forward; a halted stage is re-entered
/// by submitting a corrected record, never by rolling back.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FunnelStage {
    DisasterOccurs,
    DisasterReported,
    Verification,
    DataGathering,
    SituationAssessment,
    NeedsVsWants,
    LocalSupportAssessment,
    DirectorApproval,
    MobilizeCare,
    ImpactReporting,
}

impl FunnelStage {
    /// All stages in funnel order.
    pub const ALL: [FunnelStage; 10] = [
        FunnelStage::DisasterOccurs,
        FunnelStage::DisasterReported,
        FunnelStage::Verification,
        FunnelStage::DataGathering,
        FunnelStage::SituationAssessment,
        FunnelStage::NeedsVsWants,
        FunnelStage::LocalSupportAssessment,
        FunnelStage::DirectorApproval,
        FunnelStage::MobilizeCare,
        FunnelStage::ImpactReporting,
    ];

    /// 1-based position in the funnel, for display.
    pub fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0) + 1
    }

    /// The stage that follows this one, or `None` at the end of the funnel.
    pub fn next(self) -> Option<FunnelStage> {
        let index = Self::ALL.iter().position(|s| *s == self)?;
        Self::ALL.get(index + 1).copied()
    }
}

impl std::fmt::Display for FunnelStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(FunnelStage, &str)] = &[
            (FunnelStage::DisasterOccurs, "Disaster Occurs"),
            (FunnelStage::DisasterReported, "Disaster Reported"),
            (FunnelStage::Verification, "Verification Process"),
            (FunnelStage::DataGathering, "Multi-Source Data Gathering"),
            (FunnelStage::SituationAssessment, "Real Situation Assessment"),
            (FunnelStage::NeedsVsWants, "Process Needs vs Wants"),
            (
                FunnelStage::LocalSupportAssessment,
                "Process Local Support",
            ),
            (FunnelStage::DirectorApproval, "Director Approval Required"),
            (FunnelStage::MobilizeCare, "Mobilize Care"),
            (FunnelStage::ImpactReporting, "Report Reduction/Impact"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(stage, _)| stage == self)
            .map(|(_, s)| *s)
            .unwrap_or("Unknown");

        write!(f, "{display_str}")
    }
}

/// The outcome of evaluating one stage's record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Decision {
    /// Whether the case advances to the next stage
    pub advanced: bool,
    /// Human-readable rationale
    pub message: String,
    /// Stage score, for the stages that compute one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Decision {
    pub fn advance(message: impl Into<String>) -> Self {
        Self {
            advanced: true,
            message: message.into(),
            score: None,
        }
    }

    pub fn halt(message: impl Into<String>) -> Self {
        Self {
            advanced: false,
            message: message.into(),
            score: None,
        }
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }
}

/// One entry in the controller's run history.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StageOutcome {
    pub stage: FunnelStage,
    pub decision: Decision,
    pub recorded_at: DateTime<Utc>,
}
