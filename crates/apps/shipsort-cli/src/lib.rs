//! Command-line interface for shipsort.
//!
//! This crate provides the `shipsort` binary, which sorts a tree of shipment
//! logs and extracts the shipment fields of the relevant ones:
//!
//! - **run**: triage every `*.txt` log under the source directory, write the
//!   timestamped CSV report and move files into processed, skipped and
//!   warning directories
//! - **inspect**: show how one log would be triaged
//! - **init**: write a default settings file and create the directories
//! - **completions**: generate shell completions
//!
//! # Quick Start
//!
//! ```bash
//! # Write shipsort.toml and create source/processed/skipped/warning
//! shipsort init
//!
//! # See what a run would do
//! shipsort run --dry-run
//!
//! # Sort for real, moving processed logs too
//! shipsort run --move-processed
//! ```
//!
//! # Output Formats
//!
//! All commands support `--format`:
//!
//! - `human` (default): Human-readable with colors
//! - `json`: Machine-readable JSON
//!
//! # Configuration
//!
//! Settings are loaded from `shipsort.toml` in the working directory, or
//! from the file given with `--config`. A legacy `settings.json` with the
//! same sections is accepted as well.

pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod progress;
pub mod prompt;

// Re-export main types
pub use cli::{Cli, Commands, CompletionShell, OutputFormatArg};
pub use config::Settings;
pub use error::{CliError, CliResult};
pub use output::{OutputFormat, Render};
