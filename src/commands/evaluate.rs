//! Replay a case file through a fresh funnel controller.

use crate::config::load_config;
use crate::core::Error;
use crate::funnel::FunnelController;
use crate::io::{create_writer, load_case_file, OutputFormat};
use anyhow::Result;
use std::path::{Path, PathBuf};

pub struct EvaluateConfig {
    pub case_file: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config_dir: PathBuf,
}

pub fn evaluate_case(config: EvaluateConfig) -> Result<()> {
    let thresholds = load_config(Path::new(&config.config_dir)).thresholds;
    let case = load_case_file(&config.case_file)?;
    let mut controller = FunnelController::with_thresholds(thresholds);

    log::info!(
        "Evaluating case {} ({} records)",
        case.case_id,
        case.records.len()
    );

    for record in case.records {
        let stage = record.stage();
        match controller.advance(record) {
            Ok(decision) => {
                if !decision.advanced {
                    log::info!("Case halted at {stage}: {}", decision.message);
                    break;
                }
                if controller.is_complete() {
                    break;
                }
            }
            Err(err @ Error::StageMismatch { .. }) => {
                return Err(anyhow::anyhow!(
                    "Case file records out of order: {err}"
                ));
            }
            Err(err) => return Err(err.into()),
        }
    }

    let report = controller.report(case.case_id);
    let mut writer = create_writer(config.format, config.output)?;
    writer.write_report(&report)?;
    Ok(())
}
