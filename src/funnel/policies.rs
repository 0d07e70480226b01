//! One policy per funnel stage.
//!
//! Policies carry their thresholds by value, taken from
//! [`FunnelThresholds`] at construction. Empty collections are defined
//! halts, never errors; a record of the wrong variant is refused with a
//! halt rather than a panic.

use crate::config::{
    ApprovalThresholds, CapacityThresholds, FunnelThresholds, NeedsThresholds,
    ReportingThresholds, SeverityThresholds, VerificationThresholds,
};
use crate::core::records::DetectionSignal;
use crate::core::{Decision, FunnelStage, StageRecord};
use crate::funnel::StagePolicy;
use crate::scoring;

/// Build the full policy chain in funnel order.
pub fn build_policies(thresholds: &FunnelThresholds) -> Vec<Box<dyn StagePolicy>> {
    vec![
        Box::new(DetectionPolicy),
        Box::new(ReportingPolicy {
            thresholds: thresholds.reporting.clone(),
        }),
        Box::new(VerificationPolicy {
            thresholds: thresholds.verification.clone(),
        }),
        Box::new(DataGatheringPolicy {
            completeness_floor: thresholds.completeness_floor,
        }),
        Box::new(AssessmentPolicy {
            thresholds: thresholds.severity.clone(),
        }),
        Box::new(NeedsPolicy {
            thresholds: thresholds.needs.clone(),
        }),
        Box::new(LocalSupportPolicy {
            thresholds: thresholds.capacity.clone(),
        }),
        Box::new(ApprovalPolicy {
            thresholds: thresholds.approval.clone(),
        }),
        Box::new(MobilizationPolicy),
        Box::new(ImpactPolicy),
    ]
}

fn wrong_record(stage: FunnelStage) -> Decision {
    Decision::halt(format!("Record does not belong to stage: {stage}"))
}

/// Stage 1: has the disaster been detected at all?
///
/// `Confirmed` is an explicit detection-event trigger and always advances.
/// `Sampled` gates on a caller-supplied uniform draw against the computed
/// detection probability.
pub struct DetectionPolicy;

impl StagePolicy for DetectionPolicy {
    fn stage(&self) -> FunnelStage {
        FunnelStage::DisasterOccurs
    }

    fn score(&self, record: &StageRecord) -> Option<f64> {
        let StageRecord::Disaster { event, .. } = record else {
            return None;
        };
        Some(scoring::detection_probability(event).probability().value())
    }

    fn decide(&self, record: &StageRecord) -> Decision {
        let StageRecord::Disaster { event, signal } = record else {
            return wrong_record(self.stage());
        };
        let probability = scoring::detection_probability(event).probability().value();

        match signal {
            DetectionSignal::Confirmed => {
                Decision::advance("Detection confirmed - disaster reported")
                    .with_score(probability)
            }
            DetectionSignal::Sampled(draw) if *draw < probability => Decision::advance(format!(
                "Disaster detected (detection probability: {:.0}%)",
                probability * 100.0
            ))
            .with_score(probability),
            DetectionSignal::Sampled(_) => {
                Decision::halt("Disaster occurred but was not detected yet")
                    .with_score(probability)
            }
        }
    }
}

/// Stage 2: do the incoming reports justify verification?
pub struct ReportingPolicy {
    pub thresholds: ReportingThresholds,
}

impl StagePolicy for ReportingPolicy {
    fn stage(&self) -> FunnelStage {
        FunnelStage::DisasterReported
    }

    fn score(&self, _record: &StageRecord) -> Option<f64> {
        None
    }

    fn decide(&self, record: &StageRecord) -> Decision {
        let StageRecord::Reports(reports) = record else {
            return wrong_record(self.stage());
        };
        if reports.is_empty() {
            return Decision::halt("No reports received");
        }

        let t = &self.thresholds;
        let has_reliable = reports
            .iter()
            .any(|r| r.source_reliability > t.reliability_floor);
        let viral_count = reports
            .iter()
            .filter(|r| r.social_media_virality > t.virality_floor)
            .count();
        let has_government = reports.iter().any(|r| r.government_acknowledgment);

        if has_reliable || viral_count > t.viral_report_count || has_government {
            Decision::advance("Reports trigger verification process")
        } else if reports.len() > t.volume_floor {
            Decision::advance("Volume of reports triggers verification")
        } else {
            Decision::halt("Insufficient credible reports to trigger verification")
        }
    }
}

/// Stage 3: verification confidence bands.
pub struct VerificationPolicy {
    pub thresholds: VerificationThresholds,
}

impl StagePolicy for VerificationPolicy {
    fn stage(&self) -> FunnelStage {
        FunnelStage::Verification
    }

    fn score(&self, record: &StageRecord) -> Option<f64> {
        let StageRecord::Verification(data) = record else {
            return None;
        };
        Some(scoring::verification_score(data).total().value())
    }

    fn decide(&self, record: &StageRecord) -> Decision {
        let StageRecord::Verification(data) = record else {
            return wrong_record(self.stage());
        };
        let score = scoring::verification_score(data).total().value();
        let t = &self.thresholds;

        let decision = if score > t.high_confidence {
            Decision::advance("High confidence verification - proceed to data gathering")
        } else if score > t.needs_more {
            Decision::halt("Medium confidence - requesting additional verification sources")
        } else if score > t.disputed {
            Decision::halt("Low confidence - disputed reports, investigating further")
        } else {
            Decision::halt("Verification failed - likely false alarm")
        };
        decision.with_score(score)
    }
}

/// Stage 4: is the gathered data complete enough to assess?
pub struct DataGatheringPolicy {
    pub completeness_floor: f64,
}

impl StagePolicy for DataGatheringPolicy {
    fn stage(&self) -> FunnelStage {
        FunnelStage::DataGathering
    }

    fn score(&self, record: &StageRecord) -> Option<f64> {
        let StageRecord::MultiSource(data) = record else {
            return None;
        };
        Some(scoring::data_completeness(data).value())
    }

    fn decide(&self, record: &StageRecord) -> Decision {
        let StageRecord::MultiSource(data) = record else {
            return wrong_record(self.stage());
        };
        let completeness = scoring::data_completeness(data).value();

        let decision = if completeness > self.completeness_floor {
            Decision::advance(format!(
                "Sufficient data gathered ({:.1}% complete)",
                completeness * 100.0
            ))
        } else {
            Decision::halt(format!(
                "Insufficient data ({:.1}% complete) - continuing data collection",
                completeness * 100.0
            ))
        };
        decision.with_score(completeness)
    }
}

/// Stage 5: does the verified situation warrant a response?
pub struct AssessmentPolicy {
    pub thresholds: SeverityThresholds,
}

impl StagePolicy for AssessmentPolicy {
    fn stage(&self) -> FunnelStage {
        FunnelStage::SituationAssessment
    }

    fn score(&self, record: &StageRecord) -> Option<f64> {
        let StageRecord::Assessment(assessment) = record else {
            return None;
        };
        Some(scoring::severity_score(assessment).total().value())
    }

    fn decide(&self, record: &StageRecord) -> Decision {
        let StageRecord::Assessment(assessment) = record else {
            return wrong_record(self.stage());
        };
        let severity = scoring::severity_score(assessment).total().value();
        let t = &self.thresholds;

        let decision = if severity > t.critical {
            Decision::advance(format!(
                "Critical situation confirmed (severity: {severity:.0}/100)"
            ))
        } else if severity > t.serious {
            Decision::advance(format!(
                "Serious situation requiring response (severity: {severity:.0}/100)"
            ))
        } else if severity > t.monitor {
            Decision::halt(format!(
                "Moderate situation - monitoring but no immediate response (severity: {severity:.0}/100)"
            ))
        } else {
            Decision::halt(format!(
                "Low severity - no humanitarian response needed (severity: {severity:.0}/100)"
            ))
        };
        decision.with_score(severity)
    }
}

/// Stage 6: enough unmet need to intervene?
pub struct NeedsPolicy {
    pub thresholds: NeedsThresholds,
}

impl StagePolicy for NeedsPolicy {
    fn stage(&self) -> FunnelStage {
        FunnelStage::NeedsVsWants
    }

    fn score(&self, _record: &StageRecord) -> Option<f64> {
        None
    }

    fn decide(&self, record: &StageRecord) -> Decision {
        let StageRecord::Needs(analysis) = record else {
            return wrong_record(self.stage());
        };
        let critical = analysis.critical_need_count();
        let total = analysis.total_need_count();
        let t = &self.thresholds;

        if critical > t.critical_count {
            Decision::advance(format!(
                "Major intervention required - {critical} critical needs identified"
            ))
        } else if total > t.total_count {
            Decision::advance(format!(
                "Moderate intervention required - {total} total needs"
            ))
        } else {
            Decision::halt("Minimal needs identified - local capacity may be sufficient")
        }
    }
}

/// Stage 7: escalate only when local capacity cannot carry the response.
///
/// Advancing here means external help is needed; adequate local capacity
/// exits the funnel as a success for the affected community.
pub struct LocalSupportPolicy {
    pub thresholds: CapacityThresholds,
}

impl StagePolicy for LocalSupportPolicy {
    fn stage(&self) -> FunnelStage {
        FunnelStage::LocalSupportAssessment
    }

    fn score(&self, record: &StageRecord) -> Option<f64> {
        let StageRecord::LocalSupport(assessment) = record else {
            return None;
        };
        Some(scoring::local_capacity_score(assessment).value())
    }

    fn decide(&self, record: &StageRecord) -> Decision {
        let StageRecord::LocalSupport(assessment) = record else {
            return wrong_record(self.stage());
        };
        let capacity = scoring::local_capacity_score(assessment).value();
        let t = &self.thresholds;
        let pct = capacity * 100.0;

        let decision = if capacity < t.insufficient {
            Decision::advance(format!(
                "Local capacity insufficient ({pct:.1}%) - external intervention required"
            ))
        } else if capacity < t.adequate {
            Decision::advance(format!(
                "Local capacity limited ({pct:.1}%) - supporting intervention recommended"
            ))
        } else {
            Decision::halt(format!(
                "Local capacity adequate ({pct:.1}%) - no external intervention needed"
            ))
        };
        decision.with_score(capacity)
    }
}

/// Stage 8: director approval bands.
pub struct ApprovalPolicy {
    pub thresholds: ApprovalThresholds,
}

impl StagePolicy for ApprovalPolicy {
    fn stage(&self) -> FunnelStage {
        FunnelStage::DirectorApproval
    }

    fn score(&self, record: &StageRecord) -> Option<f64> {
        let StageRecord::Approval(factors) = record else {
            return None;
        };
        Some(scoring::approval_score(factors).total().value())
    }

    fn decide(&self, record: &StageRecord) -> Decision {
        let StageRecord::Approval(factors) = record else {
            return wrong_record(self.stage());
        };
        let score = scoring::approval_score(factors).total().value();
        let t = &self.thresholds;

        let decision = if score > t.full {
            Decision::advance(format!(
                "Approved for full intervention (score: {score:.0}/100)"
            ))
        } else if score > t.limited {
            Decision::advance(format!(
                "Approved for limited intervention (score: {score:.0}/100)"
            ))
        } else if score > t.conditional {
            Decision::halt(format!(
                "Conditional approval - pending additional information (score: {score:.0}/100)"
            ))
        } else {
            Decision::halt(format!("Approval denied (score: {score:.0}/100)"))
        };
        decision.with_score(score)
    }
}

/// Stage 9: a plan with no approved interventions mobilizes nothing.
pub struct MobilizationPolicy;

impl StagePolicy for MobilizationPolicy {
    fn stage(&self) -> FunnelStage {
        FunnelStage::MobilizeCare
    }

    fn score(&self, _record: &StageRecord) -> Option<f64> {
        None
    }

    fn decide(&self, record: &StageRecord) -> Decision {
        let StageRecord::Mobilization(plan) = record else {
            return wrong_record(self.stage());
        };
        if plan.approved_interventions.is_empty() {
            Decision::halt("No approved interventions - nothing to mobilize")
        } else {
            Decision::advance(format!(
                "Mobilizing {} interventions",
                plan.approved_interventions.len()
            ))
        }
    }
}

/// Stage 10: terminal impact reporting.
pub struct ImpactPolicy;

impl StagePolicy for ImpactPolicy {
    fn stage(&self) -> FunnelStage {
        FunnelStage::ImpactReporting
    }

    fn score(&self, _record: &StageRecord) -> Option<f64> {
        None
    }

    fn decide(&self, record: &StageRecord) -> Decision {
        let StageRecord::Impact(impact) = record else {
            return wrong_record(self.stage());
        };
        Decision::advance(format!(
            "Impact recorded - {} people assisted, {} lives saved",
            impact.people_assisted, impact.lives_saved
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::records::{
        DisasterReport, MobilizationPlan, MultiSourceData, NeedsAnalysis, ReportedSeverity,
        SourceType, VerificationData,
    };
    use chrono::Utc;

    fn report(reliability: f64, virality: u32, government: bool) -> DisasterReport {
        DisasterReport {
            report_id: "RPT_000".to_string(),
            source_type: SourceType::FieldWorker,
            source_reliability: reliability,
            reporter_location: "Goma".to_string(),
            report_timestamp: Utc::now(),
            reported_casualties: 40,
            reported_affected: 3_000,
            reported_severity: ReportedSeverity::Severe,
            includes_media: false,
            contains_coordinates: false,
            social_media_virality: virality,
            government_acknowledgment: government,
        }
    }

    fn reporting_policy() -> ReportingPolicy {
        ReportingPolicy {
            thresholds: ReportingThresholds::default(),
        }
    }

    #[test]
    fn empty_report_list_halts() {
        let decision = reporting_policy().decide(&StageRecord::Reports(vec![]));
        assert!(!decision.advanced);
        assert_eq!(decision.message, "No reports received");
    }

    #[test]
    fn one_reliable_report_is_enough() {
        let records = StageRecord::Reports(vec![report(0.9, 0, false)]);
        assert!(reporting_policy().decide(&records).advanced);
    }

    #[test]
    fn government_acknowledgment_is_enough() {
        let records = StageRecord::Reports(vec![report(0.2, 0, true)]);
        assert!(reporting_policy().decide(&records).advanced);
    }

    #[test]
    fn six_mediocre_reports_advance_on_volume_alone() {
        let reports: Vec<_> = (0..6).map(|_| report(0.5, 10, false)).collect();
        let decision = reporting_policy().decide(&StageRecord::Reports(reports));
        assert!(decision.advanced);
        assert_eq!(decision.message, "Volume of reports triggers verification");
    }

    #[test]
    fn five_mediocre_reports_halt() {
        let reports: Vec<_> = (0..5).map(|_| report(0.5, 10, false)).collect();
        let decision = reporting_policy().decide(&StageRecord::Reports(reports));
        assert!(!decision.advanced);
        assert_eq!(
            decision.message,
            "Insufficient credible reports to trigger verification"
        );
    }

    #[test]
    fn four_viral_reports_advance() {
        let reports: Vec<_> = (0..4).map(|_| report(0.5, 80, false)).collect();
        assert!(reporting_policy()
            .decide(&StageRecord::Reports(reports))
            .advanced);
    }

    #[test]
    fn verification_bands_produce_the_documented_messages() {
        let policy = VerificationPolicy {
            thresholds: VerificationThresholds::default(),
        };
        let full = VerificationData {
            satellite_imagery_available: true,
            satellite_damage_assessment: 1.0,
            multiple_source_correlation: 1.0,
            government_confirmation: true,
            international_media_coverage: true,
            social_media_verification_score: 1.0,
            expert_analysis_available: true,
            historical_pattern_match: 1.0,
        };
        let decision = policy.decide(&StageRecord::Verification(full.clone()));
        assert!(decision.advanced);
        assert_eq!(decision.score, Some(1.0));

        let weak = VerificationData {
            satellite_imagery_available: false,
            satellite_damage_assessment: 0.1,
            multiple_source_correlation: 0.2,
            government_confirmation: false,
            international_media_coverage: false,
            social_media_verification_score: 0.1,
            expert_analysis_available: false,
            historical_pattern_match: 0.1,
        };
        let decision = policy.decide(&StageRecord::Verification(weak));
        assert!(!decision.advanced);
        assert_eq!(decision.message, "Verification failed - likely false alarm");
    }

    #[test]
    fn empty_multi_source_data_halts_with_zero_score() {
        let policy = DataGatheringPolicy {
            completeness_floor: 0.7,
        };
        let decision = policy.decide(&StageRecord::MultiSource(MultiSourceData::default()));
        assert!(!decision.advanced);
        assert_eq!(decision.score, Some(0.0));
    }

    #[test]
    fn needs_gate_prefers_critical_count_over_total() {
        let policy = NeedsPolicy {
            thresholds: NeedsThresholds::default(),
        };
        let analysis = NeedsAnalysis {
            life_saving_needs: (0..4).map(|i| format!("need_{i}")).collect(),
            critical_medical_needs: (0..2).map(|i| format!("med_{i}")).collect(),
            ..Default::default()
        };
        let decision = policy.decide(&StageRecord::Needs(analysis));
        assert!(decision.advanced);
        assert!(decision.message.contains("6 critical needs"));
    }

    #[test]
    fn empty_needs_list_halts_without_error() {
        let policy = NeedsPolicy {
            thresholds: NeedsThresholds::default(),
        };
        let decision = policy.decide(&StageRecord::Needs(NeedsAnalysis::default()));
        assert!(!decision.advanced);
    }

    #[test]
    fn empty_mobilization_plan_halts() {
        let decision = MobilizationPolicy.decide(&StageRecord::Mobilization(
            MobilizationPlan::default(),
        ));
        assert!(!decision.advanced);
    }

    #[test]
    fn mismatched_record_is_refused_not_panicked() {
        let decision = reporting_policy().decide(&StageRecord::Needs(NeedsAnalysis::default()));
        assert!(!decision.advanced);
        assert!(decision.message.contains("does not belong"));
        assert!(!reporting_policy().accepts(&StageRecord::Needs(NeedsAnalysis::default())));
    }

    #[test]
    fn policy_chain_covers_every_stage_in_order() {
        let policies = build_policies(&FunnelThresholds::default());
        assert_eq!(policies.len(), FunnelStage::ALL.len());
        for (policy, stage) in policies.iter().zip(FunnelStage::ALL) {
            assert_eq!(policy.stage(), stage);
        }
    }
}
