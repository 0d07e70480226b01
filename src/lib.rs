// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod funnel;
pub mod io;
pub mod scoring;
pub mod synthetic;

// Re-export commonly used types
pub use crate::core::{
    ApprovalFactors, Decision, DetectionSignal, DisasterEvent, DisasterReport, DisasterType,
    Error, FunnelStage, ImpactMeasurement, LocalSupportAssessment, MobilizationPlan,
    MultiSourceData, NeedsAnalysis, Result, Score0To1, Score0To100, SecurityLevel,
    SituationAssessment, StageOutcome, StageRecord, ThreatLevel, VerificationData,
};

pub use crate::funnel::{FunnelController, FunnelReport, StagePolicy};

pub use crate::scoring::{
    approval_score, data_completeness, detection_probability, local_capacity_score,
    severity_score, verification_score,
};

pub use crate::config::{load_config, FunnelThresholds, ReliefgridConfig};

pub use crate::io::{create_writer, load_case_file, CaseFile, OutputFormat, OutputWriter};
