//! Decision-threshold configuration.
//!
//! Scoring weights are fixed design constants in `scoring`; the thresholds
//! the transition policies compare those scores against live here, with
//! defaults matching the calibrated values. A `reliefgrid.toml` in the
//! working directory overrides them.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "reliefgrid.toml";

/// Thresholds for the reporting stage's credibility gates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportingThresholds {
    /// A single report above this reliability is credible on its own
    #[serde(default = "default_reliability_floor")]
    pub reliability_floor: f64,

    /// Virality level a report must exceed to count as viral
    #[serde(default = "default_virality_floor")]
    pub virality_floor: u32,

    /// More than this many viral reports triggers verification
    #[serde(default = "default_viral_report_count")]
    pub viral_report_count: usize,

    /// More than this many reports triggers verification on volume alone
    #[serde(default = "default_volume_floor")]
    pub volume_floor: usize,
}

impl Default for ReportingThresholds {
    fn default() -> Self {
        Self {
            reliability_floor: default_reliability_floor(),
            virality_floor: default_virality_floor(),
            viral_report_count: default_viral_report_count(),
            volume_floor: default_volume_floor(),
        }
    }
}

fn default_reliability_floor() -> f64 {
    0.7
}
fn default_virality_floor() -> u32 {
    50
}
fn default_viral_report_count() -> usize {
    3
}
fn default_volume_floor() -> usize {
    5
}

/// Confidence bands for the verification stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationThresholds {
    /// Above this the case advances
    #[serde(default = "default_high_confidence")]
    pub high_confidence: f64,

    /// Above this (but below high) more verification is requested
    #[serde(default = "default_needs_more")]
    pub needs_more: f64,

    /// Above this (but below needs-more) the reports are disputed;
    /// at or below, the case is a likely false alarm
    #[serde(default = "default_disputed")]
    pub disputed: f64,
}

impl Default for VerificationThresholds {
    fn default() -> Self {
        Self {
            high_confidence: default_high_confidence(),
            needs_more: default_needs_more(),
            disputed: default_disputed(),
        }
    }
}

fn default_high_confidence() -> f64 {
    0.8
}
fn default_needs_more() -> f64 {
    0.6
}
fn default_disputed() -> f64 {
    0.4
}

/// Severity bands for the situation assessment stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityThresholds {
    /// Above this the situation is critical
    #[serde(default = "default_severity_critical")]
    pub critical: f64,

    /// Above this a response is warranted
    #[serde(default = "default_severity_serious")]
    pub serious: f64,

    /// Above this the situation is monitored without responding
    #[serde(default = "default_severity_monitor")]
    pub monitor: f64,
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        Self {
            critical: default_severity_critical(),
            serious: default_severity_serious(),
            monitor: default_severity_monitor(),
        }
    }
}

fn default_severity_critical() -> f64 {
    80.0
}
fn default_severity_serious() -> f64 {
    60.0
}
fn default_severity_monitor() -> f64 {
    40.0
}

/// Need-count gates for the needs-vs-wants stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeedsThresholds {
    /// More critical needs than this means a major intervention
    #[serde(default = "default_critical_need_count")]
    pub critical_count: usize,

    /// More total needs than this means a moderate intervention
    #[serde(default = "default_total_need_count")]
    pub total_count: usize,
}

impl Default for NeedsThresholds {
    fn default() -> Self {
        Self {
            critical_count: default_critical_need_count(),
            total_count: default_total_need_count(),
        }
    }
}

fn default_critical_need_count() -> usize {
    5
}
fn default_total_need_count() -> usize {
    3
}

/// Capacity bands for the local support stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacityThresholds {
    /// At or above this, local capacity handles the response alone
    #[serde(default = "default_capacity_adequate")]
    pub adequate: f64,

    /// Below this, local capacity is insufficient outright
    #[serde(default = "default_capacity_insufficient")]
    pub insufficient: f64,
}

impl Default for CapacityThresholds {
    fn default() -> Self {
        Self {
            adequate: default_capacity_adequate(),
            insufficient: default_capacity_insufficient(),
        }
    }
}

fn default_capacity_adequate() -> f64 {
    0.6
}
fn default_capacity_insufficient() -> f64 {
    0.3
}

/// Approval bands for the director approval stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalThresholds {
    /// Above this a full intervention is approved
    #[serde(default = "default_approval_full")]
    pub full: f64,

    /// Above this a limited intervention is approved
    #[serde(default = "default_approval_limited")]
    pub limited: f64,

    /// Above this approval is conditional; at or below, denied
    #[serde(default = "default_approval_conditional")]
    pub conditional: f64,
}

impl Default for ApprovalThresholds {
    fn default() -> Self {
        Self {
            full: default_approval_full(),
            limited: default_approval_limited(),
            conditional: default_approval_conditional(),
        }
    }
}

fn default_approval_full() -> f64 {
    75.0
}
fn default_approval_limited() -> f64 {
    60.0
}
fn default_approval_conditional() -> f64 {
    40.0
}

/// All per-stage decision thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelThresholds {
    #[serde(default)]
    pub reporting: ReportingThresholds,

    #[serde(default)]
    pub verification: VerificationThresholds,

    /// Minimum data completeness to move past data gathering
    #[serde(default = "default_completeness_floor")]
    pub completeness_floor: f64,

    #[serde(default)]
    pub severity: SeverityThresholds,

    #[serde(default)]
    pub needs: NeedsThresholds,

    #[serde(default)]
    pub capacity: CapacityThresholds,

    #[serde(default)]
    pub approval: ApprovalThresholds,
}

fn default_completeness_floor() -> f64 {
    0.7
}

impl Default for FunnelThresholds {
    fn default() -> Self {
        Self {
            reporting: ReportingThresholds::default(),
            verification: VerificationThresholds::default(),
            completeness_floor: default_completeness_floor(),
            severity: SeverityThresholds::default(),
            needs: NeedsThresholds::default(),
            capacity: CapacityThresholds::default(),
            approval: ApprovalThresholds::default(),
        }
    }
}

impl FunnelThresholds {
    /// Calibrated defaults.
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Higher bars to advance; fewer cases reach mobilization.
    pub fn strict() -> Self {
        Self {
            verification: VerificationThresholds {
                high_confidence: 0.85,
                ..Default::default()
            },
            completeness_floor: 0.8,
            severity: SeverityThresholds {
                serious: 70.0,
                ..Default::default()
            },
            approval: ApprovalThresholds {
                full: 80.0,
                limited: 65.0,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Lower bars to advance, for exercises and tabletop drills.
    pub fn lenient() -> Self {
        Self {
            verification: VerificationThresholds {
                high_confidence: 0.7,
                ..Default::default()
            },
            completeness_floor: 0.6,
            severity: SeverityThresholds {
                serious: 50.0,
                ..Default::default()
            },
            approval: ApprovalThresholds {
                full: 70.0,
                limited: 55.0,
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Top-level configuration file contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ReliefgridConfig {
    #[serde(default)]
    pub thresholds: FunnelThresholds,
}

fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string.
pub fn parse_config(contents: &str) -> Result<ReliefgridConfig, String> {
    toml::from_str::<ReliefgridConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))
}

/// Load configuration from `reliefgrid.toml` in the given directory,
/// falling back to defaults when the file is absent or unparseable.
pub fn load_config(dir: &Path) -> ReliefgridConfig {
    let config_path = dir.join(CONFIG_FILE_NAME);
    let contents = match read_config_file(&config_path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read {}: {}", config_path.display(), e);
            }
            return ReliefgridConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            config
        }
        Err(e) => {
            eprintln!("Warning: {e}. Using defaults.");
            ReliefgridConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_calibrated_thresholds() {
        let thresholds = FunnelThresholds::default();
        assert_eq!(thresholds.reporting.reliability_floor, 0.7);
        assert_eq!(thresholds.reporting.volume_floor, 5);
        assert_eq!(thresholds.verification.high_confidence, 0.8);
        assert_eq!(thresholds.completeness_floor, 0.7);
        assert_eq!(thresholds.severity.serious, 60.0);
        assert_eq!(thresholds.needs.critical_count, 5);
        assert_eq!(thresholds.capacity.adequate, 0.6);
        assert_eq!(thresholds.approval.full, 75.0);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config = parse_config(
            r#"
[thresholds.verification]
high_confidence = 0.9
"#,
        )
        .unwrap();
        assert_eq!(config.thresholds.verification.high_confidence, 0.9);
        assert_eq!(config.thresholds.verification.needs_more, 0.6);
        assert_eq!(config.thresholds.approval.full, 75.0);
    }

    #[test]
    fn empty_toml_is_the_default_config() {
        let config = parse_config("").unwrap();
        assert_eq!(config, ReliefgridConfig::default());
    }

    #[test]
    fn invalid_toml_reports_the_file_name() {
        let err = parse_config("thresholds = 3").unwrap_err();
        assert!(err.contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path());
        assert_eq!(config, ReliefgridConfig::default());
    }

    #[test]
    fn config_file_in_directory_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[thresholds]\ncompleteness_floor = 0.5\n",
        )
        .unwrap();
        let config = load_config(dir.path());
        assert_eq!(config.thresholds.completeness_floor, 0.5);
    }

    #[test]
    fn presets_only_move_the_gates_they_name() {
        let strict = FunnelThresholds::strict();
        assert_eq!(strict.verification.high_confidence, 0.85);
        assert_eq!(strict.verification.disputed, 0.4);
        assert_eq!(strict.needs, NeedsThresholds::default());

        let lenient = FunnelThresholds::lenient();
        assert_eq!(lenient.completeness_floor, 0.6);
        assert_eq!(lenient.capacity, CapacityThresholds::default());
    }
}
