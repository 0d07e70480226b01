//! Shared record fixtures for integration tests.
#![allow(dead_code)]

use chrono::Utc;
use reliefgrid::core::records::*;
use std::collections::BTreeMap;

pub fn disaster_event() -> DisasterEvent {
    DisasterEvent {
        event_id: "DST_9001".to_string(),
        disaster_type: DisasterType::Cyclone,
        location: Location {
            country: "Philippines".to_string(),
            province: "Leyte".to_string(),
            district: "Tacloban".to_string(),
            coordinates: (11.25, 125.0),
        },
        magnitude: 8.5,
        affected_population: 75_000,
        infrastructure_damage: 0.6,
        casualty_estimate: 1_200,
        economic_impact_usd: 5.0e8,
        environmental_impact: 0.5,
        accessibility: 0.7,
        security_level: SecurityLevel::ModerateRisk,
        media_presence: 0.8,
        time_of_occurrence: Utc::now(),
        duration_estimate_hours: 36,
    }
}

pub fn report(reliability: f64, virality: u32, government: bool) -> DisasterReport {
    DisasterReport {
        report_id: "RPT_000".to_string(),
        source_type: SourceType::FieldWorker,
        source_reliability: reliability,
        reporter_location: "Tacloban".to_string(),
        report_timestamp: Utc::now(),
        reported_casualties: 1_100,
        reported_affected: 70_000,
        reported_severity: ReportedSeverity::Severe,
        includes_media: true,
        contains_coordinates: true,
        social_media_virality: virality,
        government_acknowledgment: government,
    }
}

pub fn credible_reports() -> Vec<DisasterReport> {
    vec![report(0.9, 60, true), report(0.5, 20, false)]
}

pub fn strong_verification() -> VerificationData {
    VerificationData {
        satellite_imagery_available: true,
        satellite_damage_assessment: 0.9,
        multiple_source_correlation: 0.95,
        government_confirmation: true,
        international_media_coverage: true,
        social_media_verification_score: 0.8,
        expert_analysis_available: true,
        historical_pattern_match: 0.7,
    }
}

fn document(origin: &str) -> SourceDocument {
    SourceDocument {
        origin: origin.to_string(),
        summary: "field data".to_string(),
        confidence: None,
    }
}

pub fn complete_multi_source() -> MultiSourceData {
    MultiSourceData {
        un_ocha_report: Some(document("UN OCHA")),
        government_official_statement: Some(document("Ministry")),
        ngo_field_reports: vec![document("NGO_0"), document("NGO_1")],
        media_reports: vec![
            document("Media_0"),
            document("Media_1"),
            document("Media_2"),
            document("Media_3"),
        ],
        satellite_analysis: Some(document("Imagery")),
        social_media_sentiment: SentimentBreakdown {
            positive: 0.2,
            negative: 0.6,
            neutral: 0.2,
        },
        academic_expert_assessment: Some(document("University")),
        local_authority_reports: vec![document("Local_0")],
        humanitarian_partner_intel: vec![document("Partner_0")],
    }
}

pub fn critical_assessment() -> SituationAssessment {
    let mut routes = BTreeMap::new();
    routes.insert("main_road".to_string(), "blocked".to_string());
    SituationAssessment {
        confirmed_casualties: 1_150,
        confirmed_affected_population: 72_000,
        infrastructure_damage_verified: 0.7,
        immediate_life_threat_level: ThreatLevel::Critical,
        displacement_numbers: 15_000,
        access_routes_status: routes,
        security_assessment: SecurityLevel::ModerateRisk,
        weather_forecast_impact: "deteriorating conditions expected".to_string(),
        disease_outbreak_risk: 0.5,
        food_security_impact: 0.6,
        water_access_impact: 0.4,
        shelter_needs_assessment: 8_000,
        medical_needs_assessment: MedicalNeeds {
            critical: 120,
            serious: 400,
        },
    }
}

pub fn major_needs() -> NeedsAnalysis {
    NeedsAnalysis {
        life_saving_needs: vec![
            "Emergency Medical Care".to_string(),
            "Clean Water".to_string(),
            "Food".to_string(),
            "Shelter".to_string(),
        ],
        critical_medical_needs: vec!["Trauma Surgery".to_string(), "Blood Supply".to_string()],
        basic_survival_needs: vec!["Blankets".to_string(), "Sanitation".to_string()],
        ..Default::default()
    }
}

pub fn weak_local_support() -> LocalSupportAssessment {
    LocalSupportAssessment {
        government_response_capacity: 0.2,
        local_ngo_capacity: 0.3,
        community_self_help_capacity: 0.4,
        private_sector_involvement: 0.2,
        religious_organization_support: 0.6,
        diaspora_community_support: 0.5,
        existing_infrastructure_usability: 0.3,
        local_medical_capacity: 0.2,
        local_food_supply_capacity: 0.3,
        cultural_acceptance_factors: BTreeMap::new(),
        language_barriers: vec!["Local dialect".to_string()],
        political_stability_factor: 0.5,
    }
}

pub fn fundable_approval() -> ApprovalFactors {
    let mut funding = BTreeMap::new();
    funding.insert("emergency_fund".to_string(), 2_000_000.0);
    funding.insert("donor_pledges".to_string(), 1_500_000.0);
    ApprovalFactors {
        total_estimated_cost_usd: 3_000_000.0,
        funding_source_availability: funding,
        organizational_mandate_alignment: 0.95,
        political_sensitivity_score: 0.2,
        media_attention_level: 60,
        donor_interest_likelihood: 0.8,
        operational_complexity: 0.4,
        security_risk_to_staff: 0.3,
        reputation_risk_assessment: 0.2,
        competitor_organization_involvement: BTreeMap::new(),
        success_probability: 0.8,
        timeline_to_implementation_hours: 72,
        staff_availability: BTreeMap::new(),
        equipment_availability: BTreeMap::new(),
    }
}

pub fn mobilization_plan() -> MobilizationPlan {
    let mut allocation = BTreeMap::new();
    allocation.insert("Emergency Medical Care".to_string(), 800_000.0);
    allocation.insert("Clean Water".to_string(), 400_000.0);
    MobilizationPlan {
        approved_interventions: vec![
            "Emergency Medical Care".to_string(),
            "Clean Water".to_string(),
        ],
        resource_allocation: allocation.clone(),
        personnel_deployment: BTreeMap::new(),
        timeline_milestones: Vec::new(),
        budget_breakdown: allocation,
        exit_strategy: "Hand over to local authorities".to_string(),
    }
}

pub fn impact_measurement() -> ImpactMeasurement {
    ImpactMeasurement {
        lives_saved: 340,
        people_assisted: 28_000,
        reduction_in_suffering_score: 0.7,
        infrastructure_restored: BTreeMap::new(),
        economic_impact_prevented_usd: 2.0e7,
        long_term_resilience_built: 0.4,
        community_satisfaction_score: 0.8,
        cost_per_beneficiary_usd: 95.0,
        intervention_efficiency_score: 0.75,
    }
}

/// All ten records of a case that runs the funnel end to end.
pub fn golden_path_records() -> Vec<StageRecord> {
    vec![
        StageRecord::Disaster {
            event: disaster_event(),
            signal: DetectionSignal::Confirmed,
        },
        StageRecord::Reports(credible_reports()),
        StageRecord::Verification(strong_verification()),
        StageRecord::MultiSource(complete_multi_source()),
        StageRecord::Assessment(critical_assessment()),
        StageRecord::Needs(major_needs()),
        StageRecord::LocalSupport(weak_local_support()),
        StageRecord::Approval(fundable_approval()),
        StageRecord::Mobilization(mobilization_plan()),
        StageRecord::Impact(impact_measurement()),
    ]
}
