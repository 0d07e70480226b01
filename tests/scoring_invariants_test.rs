//! End-to-end checks of the documented scoring invariants.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use reliefgrid::core::records::{StageRecord, ThreatLevel};
use reliefgrid::scoring::{
    approval_score, data_completeness, local_capacity_score, severity_score, verification_score,
};
use reliefgrid::{FunnelController, FunnelStage};
use std::collections::BTreeMap;

#[test]
fn verification_components_sum_to_the_raw_score() {
    let breakdown = verification_score(&strong_verification());
    let sum: f64 = breakdown.components().iter().map(|(_, v)| v).sum();
    assert_eq!(sum, breakdown.raw_total());
    let total = breakdown.total().value();
    assert!((0.0..=1.0).contains(&total));
}

#[test]
fn critical_threat_with_no_other_factors_is_exactly_one_hundred() {
    let mut assessment = critical_assessment();
    assessment.confirmed_casualties = 0;
    assessment.displacement_numbers = 0;
    assessment.infrastructure_damage_verified = 0.0;
    assessment.disease_outbreak_risk = 0.0;
    assessment.water_access_impact = 1.0;
    assessment.immediate_life_threat_level = ThreatLevel::Critical;

    let breakdown = severity_score(&assessment);
    assert_eq!(breakdown.raw_total(), 100.0);
    assert_eq!(breakdown.total().value(), 100.0);
}

#[test]
fn completeness_extremes_are_exact() {
    assert_eq!(data_completeness(&complete_multi_source()).value(), 1.0);
    assert_eq!(data_completeness(&Default::default()).value(), 0.0);
}

#[test]
fn six_mediocre_reports_advance_on_count_alone() {
    let mut controller = FunnelController::new();
    controller
        .advance(StageRecord::Disaster {
            event: disaster_event(),
            signal: reliefgrid::DetectionSignal::Confirmed,
        })
        .unwrap();

    let reports: Vec<_> = (0..6).map(|_| report(0.5, 30, false)).collect();
    let decision = controller.advance(StageRecord::Reports(reports)).unwrap();
    assert!(decision.advanced);
    assert_eq!(decision.message, "Volume of reports triggers verification");
    assert_eq!(controller.current_stage(), FunnelStage::Verification);
}

#[test]
fn scoring_functions_are_idempotent() {
    let verification = strong_verification();
    assert_eq!(
        verification_score(&verification),
        verification_score(&verification)
    );

    let assessment = critical_assessment();
    assert_eq!(severity_score(&assessment), severity_score(&assessment));

    let factors = fundable_approval();
    assert_eq!(approval_score(&factors), approval_score(&factors));

    let support = weak_local_support();
    assert_eq!(
        local_capacity_score(&support).value(),
        local_capacity_score(&support).value()
    );
}

#[test]
fn ideal_approval_factors_score_exactly_one_hundred() {
    let mut funding = BTreeMap::new();
    funding.insert("emergency_fund".to_string(), 5_000_000.0);
    let mut factors = fundable_approval();
    factors.total_estimated_cost_usd = 5_000_000.0;
    factors.funding_source_availability = funding;
    factors.organizational_mandate_alignment = 1.0;
    factors.success_probability = 1.0;
    factors.security_risk_to_staff = 0.0;
    factors.reputation_risk_assessment = 0.0;
    factors.donor_interest_likelihood = 1.0;
    factors.media_attention_level = 50;
    factors.operational_complexity = 0.0;
    factors.political_sensitivity_score = 0.0;

    assert_eq!(approval_score(&factors).total().value(), 100.0);
}

#[test]
fn uniform_capacity_scores_that_capacity_exactly() {
    let mut support = weak_local_support();
    support.government_response_capacity = 0.6;
    support.local_ngo_capacity = 0.6;
    support.community_self_help_capacity = 0.6;
    support.private_sector_involvement = 0.6;
    support.local_medical_capacity = 0.6;
    support.local_food_supply_capacity = 0.6;

    assert!((local_capacity_score(&support).value() - 0.6).abs() < 1e-12);
}
