//! Run one synthetic disaster case through the funnel.

use crate::config::load_config;
use crate::core::records::{DetectionSignal, NeedsAnalysis, StageRecord};
use crate::core::FunnelStage;
use crate::funnel::FunnelController;
use crate::io::{create_writer, OutputFormat};
use crate::synthetic::CaseGenerator;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub struct SimulateConfig {
    pub seed: Option<u64>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config_dir: PathBuf,
}

pub fn simulate_case(config: SimulateConfig) -> Result<()> {
    let thresholds = load_config(Path::new(&config.config_dir)).thresholds;
    let mut generator = CaseGenerator::new(config.seed);
    let mut controller = FunnelController::with_thresholds(thresholds);

    let event = generator.disaster_event();
    let case_id = event.event_id.clone();
    log::info!(
        "Simulating case {}: {} in {}",
        case_id,
        event.disaster_type,
        event.location.district
    );

    // Records generated lazily, one per stage, until the funnel halts or
    // completes. Needs feed the mobilization plan, so keep them around.
    let mut needs: Option<NeedsAnalysis> = None;
    loop {
        let record = match controller.current_stage() {
            FunnelStage::DisasterOccurs => StageRecord::Disaster {
                event: event.clone(),
                signal: DetectionSignal::Sampled(generator.detection_draw()),
            },
            FunnelStage::DisasterReported => StageRecord::Reports(generator.reports(&event)),
            FunnelStage::Verification => StageRecord::Verification(generator.verification_data()),
            FunnelStage::DataGathering => StageRecord::MultiSource(generator.multi_source_data()),
            FunnelStage::SituationAssessment => {
                StageRecord::Assessment(generator.situation_assessment(&event))
            }
            FunnelStage::NeedsVsWants => {
                let analysis = generator.needs_analysis();
                needs = Some(analysis.clone());
                StageRecord::Needs(analysis)
            }
            FunnelStage::LocalSupportAssessment => {
                StageRecord::LocalSupport(generator.local_support())
            }
            FunnelStage::DirectorApproval => StageRecord::Approval(generator.approval_factors()),
            FunnelStage::MobilizeCare => {
                let analysis = needs.clone().unwrap_or_default();
                StageRecord::Mobilization(generator.mobilization_plan(&analysis))
            }
            FunnelStage::ImpactReporting => StageRecord::Impact(generator.impact_measurement()),
        };

        let decision = controller.advance(record)?;
        if !decision.advanced || controller.is_complete() {
            break;
        }
    }

    let report = controller.report(case_id);
    let mut writer = create_writer(config.format, config.output)?;
    writer.write_report(&report)?;
    Ok(())
}
