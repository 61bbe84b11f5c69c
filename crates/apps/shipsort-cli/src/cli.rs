//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Shipment log triage.
#[derive(Parser, Debug)]
#[command(name = "shipsort")]
#[command(author = "Shipsort Contributors")]
#[command(version)]
#[command(about = "Sort shipment logs and extract shipment fields into a CSV report")]
#[command(
    long_about = "Scans a tree of shipment logs, extracts reference, job, distribution order and airwaybill numbers from the relevant ones, writes a timestamped CSV report and moves the logs into processed, skipped and warning folders.\n\nRun 'shipsort init' to create a settings file."
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the settings file (TOML, or JSON if it ends in .json).
    #[arg(short, long, global = true, env = "SHIPSORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (human or json).
    #[arg(short, long, global = true, default_value = "human")]
    pub format: OutputFormatArg,

    /// Also log to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Output format argument for clap.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormatArg {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Triage every log under the source directory and write the report.
    ///
    /// Creates missing source/processed/skipped/warning directories first.
    Run {
        /// Classify and extract only: move nothing, write no report.
        #[arg(long)]
        dry_run: bool,

        /// Move processed logs regardless of the settings file.
        #[arg(long)]
        move_processed: bool,

        /// Move skipped logs regardless of the settings file.
        #[arg(long)]
        move_skipped: bool,
    },

    /// Show how a single log would be triaged, without moving it.
    Inspect {
        /// Path to the log file.
        file: PathBuf,
    },

    /// Write a default settings file and create the triage directories.
    Init {
        /// Overwrite an existing settings file without asking.
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: CompletionShell,
    },
}

/// Shells supported by `completions`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_flags() {
        let cli = Cli::try_parse_from(["shipsort", "run", "--dry-run", "--move-skipped"]).unwrap();
        match cli.command {
            Commands::Run {
                dry_run,
                move_processed,
                move_skipped,
            } => {
                assert!(dry_run);
                assert!(!move_processed);
                assert!(move_skipped);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "shipsort",
            "inspect",
            "log_1.txt",
            "--format",
            "json",
            "--config",
            "settings.json",
        ])
        .unwrap();
        assert!(matches!(cli.format, OutputFormatArg::Json));
        assert_eq!(cli.config, Some(PathBuf::from("settings.json")));
    }
}
