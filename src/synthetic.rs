//! Synthetic case generation for the demo surfaces.
//!
//! Stochastic stand-ins for the real external collaborators (report
//! intake, satellite feeds, field assessment forms). All randomness in the
//! crate is confined to this module and the callers that own a generator;
//! the scoring and funnel modules never draw.

use crate::core::records::{
    ApprovalFactors, CostBenefit, DisasterEvent, DisasterReport, DisasterType, ImpactMeasurement,
    LocalSupportAssessment, Location, MedicalNeeds, Milestone, MobilizationPlan, MultiSourceData,
    NeedsAnalysis, RankedNeed, ReportedSeverity, SecurityLevel, SentimentBreakdown,
    SituationAssessment, SourceDocument, SourceType, ThreatLevel, VerificationData,
};
use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

const DISASTER_TYPES: &[DisasterType] = &[
    DisasterType::Earthquake,
    DisasterType::Flood,
    DisasterType::Cyclone,
    DisasterType::DiseaseOutbreak,
    DisasterType::ConflictDisplacement,
    DisasterType::Drought,
];

const SECURITY_LEVELS: &[SecurityLevel] = &[
    SecurityLevel::Safe,
    SecurityLevel::ModerateRisk,
    SecurityLevel::HighRisk,
    SecurityLevel::ExtremelyDangerous,
];

const THREAT_LEVELS: &[ThreatLevel] = &[
    ThreatLevel::None,
    ThreatLevel::Low,
    ThreatLevel::Medium,
    ThreatLevel::High,
    ThreatLevel::Critical,
];

const REPORT_SOURCES: &[(SourceType, f64)] = &[
    (SourceType::LocalNews, 0.6),
    (SourceType::SocialMedia, 0.4),
    (SourceType::FieldWorker, 0.8),
    (SourceType::GovernmentOfficial, 0.9),
    (SourceType::UnPartner, 0.85),
    (SourceType::Ngo, 0.7),
];

const LIFE_SAVING: &[&str] = &["Emergency Medical Care", "Clean Water", "Food", "Shelter"];
const CRITICAL_MEDICAL: &[&str] = &["Trauma Surgery", "Blood Supply", "Antibiotics", "Vaccines"];
const BASIC_SURVIVAL: &[&str] = &["Blankets", "Cooking Supplies", "Sanitation", "Communication"];

fn locations() -> Vec<Location> {
    vec![
        Location {
            country: "Democratic Republic of Congo".to_string(),
            province: "North Kivu".to_string(),
            district: "Goma".to_string(),
            coordinates: (-1.67, 29.23),
        },
        Location {
            country: "Bangladesh".to_string(),
            province: "Chittagong".to_string(),
            district: "Cox's Bazar".to_string(),
            coordinates: (21.45, 92.0),
        },
        Location {
            country: "Yemen".to_string(),
            province: "Hodeidah".to_string(),
            district: "Al Hudaydah".to_string(),
            coordinates: (14.8, 42.95),
        },
        Location {
            country: "Philippines".to_string(),
            province: "Leyte".to_string(),
            district: "Tacloban".to_string(),
            coordinates: (11.25, 125.0),
        },
    ]
}

pub struct CaseGenerator {
    rng: StdRng,
}

impl CaseGenerator {
    /// Seeded generator for reproducible runs; unseeded draws from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Uniform draw for the demo detection gate.
    pub fn detection_draw(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    pub fn disaster_event(&mut self) -> DisasterEvent {
        let location = locations()
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_else(|| locations().remove(0));
        DisasterEvent {
            event_id: format!("DST_{}", self.rng.gen_range(1000..10000)),
            disaster_type: *DISASTER_TYPES.choose(&mut self.rng).unwrap_or(&DisasterType::Flood),
            location,
            magnitude: self.rng.gen_range(4.0..9.5),
            affected_population: self.rng.gen_range(1_000..100_000),
            infrastructure_damage: self.rng.gen_range(0.1..0.9),
            casualty_estimate: self.rng.gen_range(10..5_000),
            economic_impact_usd: self.rng.gen_range(1.0e6..1.0e9),
            environmental_impact: self.rng.gen_range(0.0..0.8),
            accessibility: self.rng.gen_range(0.2..0.9),
            security_level: *SECURITY_LEVELS
                .choose(&mut self.rng)
                .unwrap_or(&SecurityLevel::ModerateRisk),
            media_presence: self.rng.gen_range(0.3..0.9),
            time_of_occurrence: Utc::now(),
            duration_estimate_hours: self.rng.gen_range(2..72),
        }
    }

    pub fn reports(&mut self, event: &DisasterEvent) -> Vec<DisasterReport> {
        let count = self.rng.gen_range(1..=8);
        (0..count).map(|i| self.report(event, i)).collect()
    }

    fn report(&mut self, event: &DisasterEvent, index: usize) -> DisasterReport {
        let (source_type, base_reliability) = *REPORT_SOURCES
            .choose(&mut self.rng)
            .unwrap_or(&(SourceType::Ngo, 0.7));
        let severities = [
            ReportedSeverity::Minor,
            ReportedSeverity::Moderate,
            ReportedSeverity::Severe,
            ReportedSeverity::Catastrophic,
        ];
        DisasterReport {
            report_id: format!("RPT_{index:03}"),
            source_type,
            source_reliability: (base_reliability + self.rng.gen_range(-0.2..0.2)).clamp(0.0, 1.0),
            reporter_location: format!("{} outskirts", event.location.district),
            report_timestamp: Utc::now() - Duration::hours(self.rng.gen_range(1..24)),
            reported_casualties: event
                .casualty_estimate
                .saturating_add_signed(self.rng.gen_range(-100i64..200)),
            reported_affected: event
                .affected_population
                .saturating_add_signed(self.rng.gen_range(-1_000i64..5_000)),
            reported_severity: *severities.choose(&mut self.rng).unwrap_or(&ReportedSeverity::Moderate),
            includes_media: self.rng.gen_bool(0.5),
            contains_coordinates: self.rng.gen_bool(0.5),
            social_media_virality: self.rng.gen_range(0..=100),
            government_acknowledgment: self.rng.gen_bool(0.5),
        }
    }

    pub fn verification_data(&mut self) -> VerificationData {
        VerificationData {
            satellite_imagery_available: self.rng.gen_bool(0.5),
            satellite_damage_assessment: self.rng.gen_range(0.0..1.0),
            multiple_source_correlation: self.rng.gen_range(0.3..0.95),
            government_confirmation: self.rng.gen_bool(0.5),
            international_media_coverage: self.rng.gen_bool(0.5),
            social_media_verification_score: self.rng.gen_range(0.2..0.9),
            expert_analysis_available: self.rng.gen_bool(0.5),
            historical_pattern_match: self.rng.gen_range(0.1..0.8),
        }
    }

    fn maybe_document(&mut self, origin: &str) -> Option<SourceDocument> {
        self.rng.gen_bool(0.5).then(|| SourceDocument {
            origin: origin.to_string(),
            summary: "preliminary assessment".to_string(),
            confidence: Some(self.rng.gen_range(0.6..0.9)),
        })
    }

    fn documents(&mut self, prefix: &str, max: usize) -> Vec<SourceDocument> {
        let count = self.rng.gen_range(0..=max);
        (0..count)
            .map(|i| SourceDocument {
                origin: format!("{prefix}_{i}"),
                summary: "field data".to_string(),
                confidence: None,
            })
            .collect()
    }

    pub fn multi_source_data(&mut self) -> MultiSourceData {
        MultiSourceData {
            un_ocha_report: self.maybe_document("UN OCHA"),
            government_official_statement: self.maybe_document("Ministry"),
            ngo_field_reports: self.documents("NGO", 5),
            media_reports: self.documents("Media", 8),
            satellite_analysis: self.maybe_document("Imagery"),
            social_media_sentiment: SentimentBreakdown {
                positive: 0.2,
                negative: 0.6,
                neutral: 0.2,
            },
            academic_expert_assessment: self.maybe_document("University"),
            local_authority_reports: self.documents("Local", 3),
            humanitarian_partner_intel: self.documents("Partner", 4),
        }
    }

    pub fn situation_assessment(&mut self, event: &DisasterEvent) -> SituationAssessment {
        let mut routes = BTreeMap::new();
        routes.insert("main_road".to_string(), "blocked".to_string());
        routes.insert("secondary".to_string(), "limited".to_string());
        routes.insert("air".to_string(), "available".to_string());
        SituationAssessment {
            confirmed_casualties: event
                .casualty_estimate
                .saturating_add_signed(self.rng.gen_range(-50i64..100)),
            confirmed_affected_population: event
                .affected_population
                .saturating_add_signed(self.rng.gen_range(-500i64..2_000)),
            infrastructure_damage_verified: (event.infrastructure_damage
                + self.rng.gen_range(-0.2..0.1))
            .clamp(0.0, 1.0),
            immediate_life_threat_level: *THREAT_LEVELS
                .choose(&mut self.rng)
                .unwrap_or(&ThreatLevel::Medium),
            displacement_numbers: self.rng.gen_range(100..20_000),
            access_routes_status: routes,
            security_assessment: event.security_level,
            weather_forecast_impact: "deteriorating conditions expected".to_string(),
            disease_outbreak_risk: self.rng.gen_range(0.1..0.8),
            food_security_impact: self.rng.gen_range(0.2..0.9),
            water_access_impact: self.rng.gen_range(0.3..0.8),
            shelter_needs_assessment: self.rng.gen_range(500..10_000),
            medical_needs_assessment: MedicalNeeds {
                critical: self.rng.gen_range(10..200),
                serious: self.rng.gen_range(50..500),
            },
        }
    }

    fn sample_needs(&mut self, pool: &[&str], min: usize) -> Vec<String> {
        let count = self.rng.gen_range(min..=pool.len());
        pool.choose_multiple(&mut self.rng, count)
            .map(|s| s.to_string())
            .collect()
    }

    pub fn needs_analysis(&mut self) -> NeedsAnalysis {
        let mut scarcity = BTreeMap::new();
        scarcity.insert("medical".to_string(), 0.8);
        scarcity.insert("water".to_string(), 0.6);
        scarcity.insert("food".to_string(), 0.4);
        NeedsAnalysis {
            life_saving_needs: self.sample_needs(LIFE_SAVING, 1),
            critical_medical_needs: self.sample_needs(CRITICAL_MEDICAL, 0),
            basic_survival_needs: self.sample_needs(BASIC_SURVIVAL, 1),
            protection_needs: vec![
                "Child Protection".to_string(),
                "Women's Safety".to_string(),
                "Elderly Care".to_string(),
            ],
            nice_to_have_items: vec![
                "Educational Materials".to_string(),
                "Recreation Supplies".to_string(),
            ],
            luxury_items: vec!["Comfort items".to_string()],
            needs_priority_ranking: vec![
                RankedNeed {
                    need: "Medical Care".to_string(),
                    priority: 100,
                },
                RankedNeed {
                    need: "Water".to_string(),
                    priority: 95,
                },
                RankedNeed {
                    need: "Food".to_string(),
                    priority: 90,
                },
                RankedNeed {
                    need: "Shelter".to_string(),
                    priority: 85,
                },
            ],
            resource_scarcity_factors: scarcity,
            cost_benefit: CostBenefit {
                intervention_cost_usd: self.rng.gen_range(100_000.0..5_000_000.0),
                lives_saved_estimate: self.rng.gen_range(10..1_000),
            },
        }
    }

    pub fn local_support(&mut self) -> LocalSupportAssessment {
        let mut acceptance = BTreeMap::new();
        acceptance.insert("aid_acceptance".to_string(), 0.8);
        acceptance.insert("female_workers".to_string(), 0.6);
        acceptance.insert("foreign_presence".to_string(), 0.5);
        LocalSupportAssessment {
            government_response_capacity: self.rng.gen_range(0.1..0.8),
            local_ngo_capacity: self.rng.gen_range(0.2..0.7),
            community_self_help_capacity: self.rng.gen_range(0.3..0.9),
            private_sector_involvement: self.rng.gen_range(0.1..0.6),
            religious_organization_support: self.rng.gen_range(0.4..0.8),
            diaspora_community_support: self.rng.gen_range(0.2..0.7),
            existing_infrastructure_usability: self.rng.gen_range(0.1..0.6),
            local_medical_capacity: self.rng.gen_range(0.2..0.7),
            local_food_supply_capacity: self.rng.gen_range(0.1..0.8),
            cultural_acceptance_factors: acceptance,
            language_barriers: vec!["Local dialect".to_string(), "Literacy rates".to_string()],
            political_stability_factor: self.rng.gen_range(0.3..0.9),
        }
    }

    pub fn approval_factors(&mut self) -> ApprovalFactors {
        let mut funding = BTreeMap::new();
        funding.insert(
            "emergency_fund".to_string(),
            self.rng.gen_range(100_000.0..2_000_000.0),
        );
        funding.insert(
            "donor_pledges".to_string(),
            self.rng.gen_range(200_000.0..3_000_000.0),
        );
        funding.insert(
            "government_support".to_string(),
            self.rng.gen_range(0.0..1_000_000.0),
        );
        let mut competitors = BTreeMap::new();
        competitors.insert("MSF".to_string(), true);
        competitors.insert("Oxfam".to_string(), false);
        competitors.insert("Red Cross".to_string(), true);
        let mut staff = BTreeMap::new();
        staff.insert("field_workers".to_string(), self.rng.gen_range(5..50));
        staff.insert("specialists".to_string(), self.rng.gen_range(2..15));
        let mut equipment = BTreeMap::new();
        equipment.insert("vehicles".to_string(), self.rng.gen_range(2..20));
        equipment.insert("medical".to_string(), self.rng.gen_range(1..10));

        ApprovalFactors {
            total_estimated_cost_usd: self.rng.gen_range(500_000.0..10_000_000.0),
            funding_source_availability: funding,
            organizational_mandate_alignment: self.rng.gen_range(0.6..1.0),
            political_sensitivity_score: self.rng.gen_range(0.1..0.8),
            media_attention_level: self.rng.gen_range(10..90),
            donor_interest_likelihood: self.rng.gen_range(0.3..0.9),
            operational_complexity: self.rng.gen_range(0.2..0.9),
            security_risk_to_staff: self.rng.gen_range(0.1..0.7),
            reputation_risk_assessment: self.rng.gen_range(0.1..0.6),
            competitor_organization_involvement: competitors,
            success_probability: self.rng.gen_range(0.4..0.9),
            timeline_to_implementation_hours: self.rng.gen_range(24..168),
            staff_availability: staff,
            equipment_availability: equipment,
        }
    }

    pub fn mobilization_plan(&mut self, needs: &NeedsAnalysis) -> MobilizationPlan {
        let mut interventions: Vec<String> = needs.life_saving_needs.clone();
        interventions.extend(needs.critical_medical_needs.iter().cloned());
        let mut allocation = BTreeMap::new();
        for intervention in &interventions {
            allocation.insert(
                intervention.clone(),
                self.rng.gen_range(50_000.0..500_000.0),
            );
        }
        let mut deployment = BTreeMap::new();
        deployment.insert("field_workers".to_string(), self.rng.gen_range(10..40));
        deployment.insert("logistics".to_string(), self.rng.gen_range(3..12));
        MobilizationPlan {
            approved_interventions: interventions,
            resource_allocation: allocation.clone(),
            personnel_deployment: deployment,
            timeline_milestones: vec![
                Milestone {
                    label: "First delivery".to_string(),
                    due: Utc::now() + Duration::hours(48),
                },
                Milestone {
                    label: "Full deployment".to_string(),
                    due: Utc::now() + Duration::days(7),
                },
            ],
            budget_breakdown: allocation,
            exit_strategy: "Hand over to local authorities at 80% capacity".to_string(),
        }
    }

    pub fn impact_measurement(&mut self) -> ImpactMeasurement {
        let people_assisted = self.rng.gen_range(1_000..50_000);
        let mut restored = BTreeMap::new();
        restored.insert("water_points".to_string(), self.rng.gen_range(0.3..0.9));
        restored.insert("clinics".to_string(), self.rng.gen_range(0.2..0.8));
        ImpactMeasurement {
            lives_saved: self.rng.gen_range(10..1_000),
            people_assisted,
            reduction_in_suffering_score: self.rng.gen_range(0.3..0.9),
            infrastructure_restored: restored,
            economic_impact_prevented_usd: self.rng.gen_range(1.0e6..5.0e7),
            long_term_resilience_built: self.rng.gen_range(0.2..0.7),
            community_satisfaction_score: self.rng.gen_range(0.4..0.9),
            cost_per_beneficiary_usd: self.rng.gen_range(20.0..400.0),
            intervention_efficiency_score: self.rng.gen_range(0.3..0.9),
        }
    }
}
