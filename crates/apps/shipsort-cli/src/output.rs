//! Output formatting for CLI.

use colored::Colorize;
use serde::Serialize;
use shipsort_ops::{FileOutcome, RunCounts, RunReport};
use shipsort_types::{Disposition, ExtractedFields, WarningReason};

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use 'human' or 'json'.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Trait for renderable output.
pub trait Render {
    /// Render as human-readable string.
    fn render_human(&self) -> String;

    /// Render as JSON string.
    fn render_json(&self) -> String;

    /// Render in the specified format.
    fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Human => self.render_human(),
            OutputFormat::Json => self.render_json(),
        }
    }
}

fn colored_disposition(disposition: Disposition) -> String {
    match disposition {
        Disposition::Processed => disposition.as_str().green().to_string(),
        Disposition::Skipped => disposition.as_str().dimmed().to_string(),
        Disposition::Warning => disposition.as_str().yellow().to_string(),
    }
}

fn field_lines(fields: &ExtractedFields) -> Vec<String> {
    vec![
        format!("  {} {}", "Reference:".bold(), fields.reference_id),
        format!("  {} {}", "Job:".bold(), fields.job_number),
        format!("  {} {}", "Distribution order:".bold(), fields.distribution_order_number),
        format!("  {} {}", "Airwaybill:".bold(), fields.airwaybill),
    ]
}

// =============================================================================
// Output Types
// =============================================================================

/// A file that needs manual handling.
#[derive(Debug, Serialize)]
pub struct WarnedFile {
    pub path: String,
    pub reason: WarningReason,
}

/// A file that could not be moved.
#[derive(Debug, Serialize)]
pub struct FailedMove {
    pub path: String,
    pub error: String,
}

/// Output for the run command.
#[derive(Debug, Serialize)]
pub struct RunOutput {
    pub counts: RunCounts,
    pub records: usize,
    pub duplicates_dropped: usize,
    pub report_path: Option<String>,
    pub dry_run: bool,
    pub warned: Vec<WarnedFile>,
    pub failed_moves: Vec<FailedMove>,
}

impl RunOutput {
    /// Summarize a finished run.
    pub fn from_report(report: &RunReport) -> Self {
        let warned = report
            .outcomes
            .iter()
            .filter_map(|o| {
                o.reason.clone().map(|reason| WarnedFile {
                    path: o.path.display().to_string(),
                    reason,
                })
            })
            .collect();
        let failed_moves = report
            .outcomes
            .iter()
            .filter_map(|o: &FileOutcome| {
                o.move_error.as_ref().map(|error| FailedMove {
                    path: o.path.display().to_string(),
                    error: error.clone(),
                })
            })
            .collect();

        Self {
            counts: report.counts,
            records: report.records.len(),
            duplicates_dropped: report.duplicates_dropped,
            report_path: report
                .report_path
                .as_ref()
                .map(|p| p.display().to_string()),
            dry_run: report.dry_run,
            warned,
            failed_moves,
        }
    }
}

impl Render for RunOutput {
    fn render_human(&self) -> String {
        let mut lines = Vec::new();
        if self.dry_run {
            lines.push(format!("{}", "Dry run: no files moved, no report written".yellow()));
        }
        lines.push(format!("{} {}", "Total files:".bold(), self.counts.total));
        lines.push(format!(
            "  {} {}",
            "Processed:".green(),
            self.counts.processed
        ));
        lines.push(format!("  {} {}", "Skipped:".dimmed(), self.counts.skipped));
        lines.push(format!("  {} {}", "Warnings:".yellow(), self.counts.warnings));

        let mut records = format!("{} {}", "Records:".bold(), self.records);
        if self.duplicates_dropped > 0 {
            records.push_str(&format!(" ({} duplicates dropped)", self.duplicates_dropped));
        }
        lines.push(records);

        if let Some(path) = &self.report_path {
            lines.push(format!("{} {}", "Report:".green().bold(), path));
        }

        if !self.warned.is_empty() {
            lines.push(String::new());
            lines.push(format!("{}", "Needs manual handling:".yellow().bold()));
            for file in &self.warned {
                lines.push(format!("  {} ({})", file.path, file.reason));
            }
        }

        if !self.failed_moves.is_empty() {
            lines.push(String::new());
            lines.push(format!("{}", "Could not move:".red().bold()));
            for failed in &self.failed_moves {
                lines.push(format!("  {}: {}", failed.path, failed.error));
            }
        }

        lines.join("\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Output for the inspect command.
#[derive(Debug, Serialize)]
pub struct InspectOutput {
    pub file: String,
    pub disposition: Disposition,
    pub reason: Option<WarningReason>,
    pub fields: Option<ExtractedFields>,
    pub would_move_to: Option<String>,
}

impl Render for InspectOutput {
    fn render_human(&self) -> String {
        let mut lines = vec![
            format!("{} {}", "File:".bold(), self.file),
            format!(
                "{} {}",
                "Disposition:".bold(),
                colored_disposition(self.disposition)
            ),
        ];
        if let Some(reason) = &self.reason {
            lines.push(format!("{} {}", "Reason:".bold(), reason));
        }
        if let Some(fields) = &self.fields {
            lines.extend(field_lines(fields));
        }
        match &self.would_move_to {
            Some(to) => lines.push(format!("{} {}", "Would move to:".bold(), to)),
            None => lines.push(format!("{}", "Would stay in place".dimmed())),
        }
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Output for the init command.
#[derive(Debug, Serialize)]
pub struct InitOutput {
    pub settings_path: String,
    pub created_dirs: Vec<String>,
}

impl Render for InitOutput {
    fn render_human(&self) -> String {
        let mut lines = vec![format!(
            "{} {}",
            "Settings saved to:".green().bold(),
            self.settings_path
        )];
        if !self.created_dirs.is_empty() {
            lines.push(format!("{}", "Created directories:".green()));
            for dir in &self.created_dirs {
                lines.push(format!("  {}", dir));
            }
        }
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
