use crate::core::{Decision, StageOutcome};
use crate::funnel::FunnelReport;
use colored::*;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &FunnelReport) -> anyhow::Result<()>;
}

/// Create a writer for the chosen format, targeting a file when `output`
/// is given and stdout otherwise.
pub fn create_writer(
    format: OutputFormat,
    output: Option<PathBuf>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let target: Box<dyn Write> = match output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(target)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(target)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(target)),
    })
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &FunnelReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, report: &FunnelReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Relief Grid Funnel Report")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Case: {}", report.case_id)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &FunnelReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(
            self.writer,
            "| Stages processed | {} |",
            report.stages_processed()
        )?;
        writeln!(self.writer, "| Final stage | {} |", report.final_stage)?;
        writeln!(
            self.writer,
            "| Outcome | {} |",
            summary_outcome(report)
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_outcomes(&mut self, report: &FunnelReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Stage Decisions")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| # | Stage | Decision | Score | Rationale |")?;
        writeln!(self.writer, "|---|-------|----------|-------|-----------|")?;
        for outcome in &report.outcomes {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} |",
                outcome.stage.position(),
                outcome.stage,
                if outcome.decision.advanced {
                    "Advance"
                } else {
                    "Halt"
                },
                format_score(&outcome.decision),
                outcome.decision.message
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &FunnelReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_summary(report)?;
        self.write_outcomes(report)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &FunnelReport) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{} {}",
            "Case".bold(),
            report.case_id.as_str().bold().cyan()
        )?;
        writeln!(self.writer)?;

        for outcome in &report.outcomes {
            self.write_outcome(outcome)?;
        }

        writeln!(self.writer)?;
        let outcome_line = summary_outcome(report);
        if report.complete {
            writeln!(self.writer, "{}", outcome_line.green().bold())?;
        } else {
            writeln!(self.writer, "{}", outcome_line.yellow().bold())?;
        }
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn write_outcome(&mut self, outcome: &StageOutcome) -> anyhow::Result<()> {
        let marker = if outcome.decision.advanced {
            "✓".green()
        } else {
            "✗".red()
        };
        let stage = format!("{:>2}. {}", outcome.stage.position(), outcome.stage);
        let score = format_score(&outcome.decision);
        writeln!(
            self.writer,
            "{} {:<35} {:>8}  {}",
            marker,
            stage,
            score.dimmed(),
            outcome.decision.message
        )?;
        Ok(())
    }
}

fn format_score(decision: &Decision) -> String {
    match decision.score {
        Some(score) if score <= 1.0 => format!("{score:.2}"),
        Some(score) => format!("{score:.0}"),
        None => "-".to_string(),
    }
}

fn summary_outcome(report: &FunnelReport) -> String {
    if report.complete {
        "Funnel complete - impact reported".to_string()
    } else {
        match report.final_decision() {
            Some(decision) if !decision.advanced => {
                format!("Funnel exit at {}: {}", report.final_stage, decision.message)
            }
            _ => format!("In progress at {}", report.final_stage),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Decision, FunnelStage, StageOutcome};
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn sample_report(complete: bool) -> FunnelReport {
        FunnelReport {
            case_id: "CASE_42".to_string(),
            generated_at: Utc::now(),
            final_stage: if complete {
                FunnelStage::ImpactReporting
            } else {
                FunnelStage::Verification
            },
            complete,
            outcomes: vec![StageOutcome {
                stage: FunnelStage::DisasterOccurs,
                decision: Decision::advance("Detection confirmed - disaster reported")
                    .with_score(0.72),
                recorded_at: Utc::now(),
            }],
            records: BTreeMap::new(),
        }
    }

    #[test]
    fn json_writer_emits_parseable_output() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_report(&sample_report(false))
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["case_id"], "CASE_42");
        assert_eq!(value["complete"], false);
    }

    #[test]
    fn markdown_writer_includes_summary_and_decisions() {
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_report(&sample_report(false))
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("# Relief Grid Funnel Report"));
        assert!(text.contains("| Stages processed | 1 |"));
        assert!(text.contains("Detection confirmed"));
    }

    #[test]
    fn fractional_and_point_scores_format_differently() {
        assert_eq!(
            format_score(&Decision::advance("x").with_score(0.851)),
            "0.85"
        );
        assert_eq!(format_score(&Decision::advance("x").with_score(73.2)), "73");
        assert_eq!(format_score(&Decision::advance("x")), "-");
    }

    #[test]
    fn summary_line_reflects_completion() {
        assert!(summary_outcome(&sample_report(true)).contains("complete"));
        let mut report = sample_report(false);
        report.outcomes.push(StageOutcome {
            stage: FunnelStage::Verification,
            decision: Decision::halt("Verification failed - likely false alarm"),
            recorded_at: Utc::now(),
        });
        let line = summary_outcome(&report);
        assert!(line.contains("Funnel exit"));
        assert!(line.contains("false alarm"));
    }
}
