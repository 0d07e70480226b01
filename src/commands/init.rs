use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Relief Grid Configuration
#
# Decision thresholds for the response funnel. Scoring weights are fixed;
# these values set where each stage's advance/halt lines sit.

[thresholds]
completeness_floor = 0.7

[thresholds.reporting]
reliability_floor = 0.7
virality_floor = 50
viral_report_count = 3
volume_floor = 5

[thresholds.verification]
high_confidence = 0.8
needs_more = 0.6
disputed = 0.4

[thresholds.severity]
critical = 80.0
serious = 60.0
monitor = 40.0

[thresholds.needs]
critical_count = 5
total_count = 3

[thresholds.capacity]
adequate = 0.6
insufficient = 0.3

[thresholds.approval]
full = 75.0
limited = 60.0
conditional = 40.0
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(())
}
