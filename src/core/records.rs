//! Per-stage input records.
//!
//! One record type per funnel stage. Records are plain field bags supplied
//! by an external collaborator (report intake, satellite feed, field
//! assessment forms); the engine reads them but never mutates them.
//! Fractional fields are conceptually bounded to [0, 1]. The engine does
//! not reject out-of-range values, it clamps their contributions at scoring
//! time.

use crate::core::FunnelStage;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum DisasterType {
    Earthquake,
    Flood,
    Cyclone,
    DiseaseOutbreak,
    ConflictDisplacement,
    Drought,
}

impl std::fmt::Display for DisasterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DisasterType::Earthquake => "Earthquake",
            DisasterType::Flood => "Flood",
            DisasterType::Cyclone => "Cyclone",
            DisasterType::DiseaseOutbreak => "Disease Outbreak",
            DisasterType::ConflictDisplacement => "Conflict Displacement",
            DisasterType::Drought => "Drought",
        };
        write!(f, "{label}")
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SecurityLevel {
    Safe,
    ModerateRisk,
    HighRisk,
    ExtremelyDangerous,
}

impl std::fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SecurityLevel::Safe => "Safe",
            SecurityLevel::ModerateRisk => "Moderate Risk",
            SecurityLevel::HighRisk => "High Risk",
            SecurityLevel::ExtremelyDangerous => "Extremely Dangerous",
        };
        write!(f, "{label}")
    }
}

/// Immediate life threat level assessed in the field.
///
/// The severity score's lookup table is keyed on this scale.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThreatLevel {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(ThreatLevel, &str)] = &[
            (ThreatLevel::None, "None"),
            (ThreatLevel::Low, "Low"),
            (ThreatLevel::Medium, "Medium"),
            (ThreatLevel::High, "High"),
            (ThreatLevel::Critical, "Critical"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(level, _)| level == self)
            .map(|(_, s)| *s)
            .unwrap_or("Unknown");

        write!(f, "{display_str}")
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub country: String,
    pub province: String,
    pub district: String,
    pub coordinates: (f64, f64),
}

/// Stage 1: the disaster occurrence with all measurable variables
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DisasterEvent {
    pub event_id: String,
    pub disaster_type: DisasterType,
    pub location: Location,
    /// 1-10 scale
    pub magnitude: f64,
    pub affected_population: u64,
    /// 0-1 scale
    pub infrastructure_damage: f64,
    pub casualty_estimate: u64,
    pub economic_impact_usd: f64,
    /// 0-1 scale
    pub environmental_impact: f64,
    /// 0-1 scale, how easy the area is to reach
    pub accessibility: f64,
    pub security_level: SecurityLevel,
    /// 0-1 scale, media presence near the affected area
    pub media_presence: f64,
    pub time_of_occurrence: DateTime<Utc>,
    pub duration_estimate_hours: u32,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SourceType {
    LocalNews,
    SocialMedia,
    FieldWorker,
    GovernmentOfficial,
    UnPartner,
    Ngo,
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SourceType::LocalNews => "Local News",
            SourceType::SocialMedia => "Social Media",
            SourceType::FieldWorker => "Field Worker",
            SourceType::GovernmentOfficial => "Government Official",
            SourceType::UnPartner => "UN Partner",
            SourceType::Ngo => "NGO",
        };
        write!(f, "{label}")
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReportedSeverity {
    Minor,
    Moderate,
    Severe,
    Catastrophic,
}

/// Stage 2: a single report about the disaster from one channel
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DisasterReport {
    pub report_id: String,
    pub source_type: SourceType,
    /// 0-1 scale
    pub source_reliability: f64,
    pub reporter_location: String,
    pub report_timestamp: DateTime<Utc>,
    pub reported_casualties: u64,
    pub reported_affected: u64,
    pub reported_severity: ReportedSeverity,
    pub includes_media: bool,
    pub contains_coordinates: bool,
    /// 0-100 scale
    pub social_media_virality: u32,
    pub government_acknowledgment: bool,
}

/// Stage 3: evidence available to the verification process
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct VerificationData {
    pub satellite_imagery_available: bool,
    /// 0-1 scale
    pub satellite_damage_assessment: f64,
    /// 0-1 scale
    pub multiple_source_correlation: f64,
    pub government_confirmation: bool,
    pub international_media_coverage: bool,
    /// 0-1 scale
    pub social_media_verification_score: f64,
    pub expert_analysis_available: bool,
    /// 0-1 scale
    pub historical_pattern_match: f64,
}

/// A document gathered from one source during multi-source collection
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SourceDocument {
    pub origin: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct SentimentBreakdown {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
}

/// Stage 4: data gathered from multiple sources
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct MultiSourceData {
    pub un_ocha_report: Option<SourceDocument>,
    pub government_official_statement: Option<SourceDocument>,
    pub ngo_field_reports: Vec<SourceDocument>,
    pub media_reports: Vec<SourceDocument>,
    pub satellite_analysis: Option<SourceDocument>,
    pub social_media_sentiment: SentimentBreakdown,
    pub academic_expert_assessment: Option<SourceDocument>,
    pub local_authority_reports: Vec<SourceDocument>,
    pub humanitarian_partner_intel: Vec<SourceDocument>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MedicalNeeds {
    pub critical: u32,
    pub serious: u32,
}

/// Stage 5: the verified situation on the ground
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SituationAssessment {
    pub confirmed_casualties: u64,
    pub confirmed_affected_population: u64,
    /// 0-1 scale
    pub infrastructure_damage_verified: f64,
    pub immediate_life_threat_level: ThreatLevel,
    pub displacement_numbers: u64,
    pub access_routes_status: BTreeMap<String, String>,
    pub security_assessment: SecurityLevel,
    pub weather_forecast_impact: String,
    /// 0-1 scale
    pub disease_outbreak_risk: f64,
    /// 0-1 scale
    pub food_security_impact: f64,
    /// 0-1 scale; 1.0 means water access is intact
    pub water_access_impact: f64,
    pub shelter_needs_assessment: u64,
    pub medical_needs_assessment: MedicalNeeds,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RankedNeed {
    pub need: String,
    pub priority: u32,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct CostBenefit {
    pub intervention_cost_usd: f64,
    pub lives_saved_estimate: u64,
}

/// Stage 6: analysis separating critical needs from wants
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct NeedsAnalysis {
    pub life_saving_needs: Vec<String>,
    pub critical_medical_needs: Vec<String>,
    pub basic_survival_needs: Vec<String>,
    pub protection_needs: Vec<String>,
    pub nice_to_have_items: Vec<String>,
    pub luxury_items: Vec<String>,
    pub needs_priority_ranking: Vec<RankedNeed>,
    pub resource_scarcity_factors: BTreeMap<String, f64>,
    pub cost_benefit: CostBenefit,
}

impl NeedsAnalysis {
    /// Needs that cannot wait: life-saving plus critical-medical.
    pub fn critical_need_count(&self) -> usize {
        self.life_saving_needs.len() + self.critical_medical_needs.len()
    }

    /// Critical needs plus basic survival needs.
    pub fn total_need_count(&self) -> usize {
        self.critical_need_count() + self.basic_survival_needs.len()
    }
}

/// Stage 7: assessment of local capacity and support
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LocalSupportAssessment {
    /// 0-1 scale, as are all capacity fields below
    pub government_response_capacity: f64,
    pub local_ngo_capacity: f64,
    pub community_self_help_capacity: f64,
    pub private_sector_involvement: f64,
    pub religious_organization_support: f64,
    pub diaspora_community_support: f64,
    pub existing_infrastructure_usability: f64,
    pub local_medical_capacity: f64,
    pub local_food_supply_capacity: f64,
    pub cultural_acceptance_factors: BTreeMap<String, f64>,
    pub language_barriers: Vec<String>,
    pub political_stability_factor: f64,
}

/// Stage 8: everything a director weighs before signing off
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ApprovalFactors {
    pub total_estimated_cost_usd: f64,
    pub funding_source_availability: BTreeMap<String, f64>,
    /// 0-1 scale
    pub organizational_mandate_alignment: f64,
    /// 0-1 scale
    pub political_sensitivity_score: f64,
    /// 0-100 scale
    pub media_attention_level: u32,
    /// 0-1 scale
    pub donor_interest_likelihood: f64,
    /// 0-1 scale
    pub operational_complexity: f64,
    /// 0-1 scale
    pub security_risk_to_staff: f64,
    /// 0-1 scale
    pub reputation_risk_assessment: f64,
    pub competitor_organization_involvement: BTreeMap<String, bool>,
    /// 0-1 scale
    pub success_probability: f64,
    pub timeline_to_implementation_hours: u32,
    pub staff_availability: BTreeMap<String, u32>,
    pub equipment_availability: BTreeMap<String, u32>,
}

impl ApprovalFactors {
    /// Total funding available across all sources.
    pub fn available_funding(&self) -> f64 {
        self.funding_source_availability.values().sum()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Milestone {
    pub label: String,
    pub due: DateTime<Utc>,
}

/// Stage 9: the care mobilization plan
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct MobilizationPlan {
    pub approved_interventions: Vec<String>,
    pub resource_allocation: BTreeMap<String, f64>,
    pub personnel_deployment: BTreeMap<String, u32>,
    pub timeline_milestones: Vec<Milestone>,
    pub budget_breakdown: BTreeMap<String, f64>,
    pub exit_strategy: String,
}

/// Stage 10: measured reduction/impact of the intervention
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ImpactMeasurement {
    pub lives_saved: u64,
    pub people_assisted: u64,
    /// 0-1 scale
    pub reduction_in_suffering_score: f64,
    pub infrastructure_restored: BTreeMap<String, f64>,
    pub economic_impact_prevented_usd: f64,
    /// 0-1 scale
    pub long_term_resilience_built: f64,
    /// 0-1 scale
    pub community_satisfaction_score: f64,
    pub cost_per_beneficiary_usd: f64,
    /// 0-1 scale
    pub intervention_efficiency_score: f64,
}

/// How the detection stage learned about the event.
///
/// `Confirmed` is the production path: an explicit detection-event trigger
/// from an upstream system. `Sampled` carries a uniform draw supplied by
/// the caller for demo gating; the engine itself never generates
/// randomness.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub enum DetectionSignal {
    Confirmed,
    Sampled(f64),
}

/// One record per stage, wrapped so the controller's `advance` accepts any
/// of them through a single entry point.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum StageRecord {
    Disaster {
        event: DisasterEvent,
        signal: DetectionSignal,
    },
    Reports(Vec<DisasterReport>),
    Verification(VerificationData),
    MultiSource(MultiSourceData),
    Assessment(SituationAssessment),
    Needs(NeedsAnalysis),
    LocalSupport(LocalSupportAssessment),
    Approval(ApprovalFactors),
    Mobilization(MobilizationPlan),
    Impact(ImpactMeasurement),
}

impl StageRecord {
    /// The funnel stage this record belongs to.
    pub fn stage(&self) -> FunnelStage {
        match self {
            StageRecord::Disaster { .. } => FunnelStage::DisasterOccurs,
            StageRecord::Reports(_) => FunnelStage::DisasterReported,
            StageRecord::Verification(_) => FunnelStage::Verification,
            StageRecord::MultiSource(_) => FunnelStage::DataGathering,
            StageRecord::Assessment(_) => FunnelStage::SituationAssessment,
            StageRecord::Needs(_) => FunnelStage::NeedsVsWants,
            StageRecord::LocalSupport(_) => FunnelStage::LocalSupportAssessment,
            StageRecord::Approval(_) => FunnelStage::DirectorApproval,
            StageRecord::Mobilization(_) => FunnelStage::MobilizeCare,
            StageRecord::Impact(_) => FunnelStage::ImpactReporting,
        }
    }
}
