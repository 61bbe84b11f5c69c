//! shipsort binary entry point.

use clap::Parser;
use colored::Colorize;

use shipsort_cli::{
    cli::{Cli, Commands},
    commands::{self, RunOptions},
    config::{default_settings_path, Settings},
    error::{CliError, CliResult},
    logging,
    output::OutputFormat,
};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        print_error(&e);
        std::process::exit(e.exit_code());
    }
}

/// Print a user-friendly error message with error code and recovery hint.
fn print_error(e: &CliError) {
    let code = e.error_code();

    eprintln!(
        "{} [{}]: {}",
        "Error".red().bold(),
        code.to_string().yellow(),
        e
    );

    if let Some(suggestion) = code.suggestion() {
        eprintln!("{}: {}", "Hint".cyan(), suggestion);
    }
}

/// Load the settings and install logging for commands that need them.
fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let path = cli.config.clone().unwrap_or_else(default_settings_path);
    let settings = Settings::load(&path)?;
    logging::init(&settings.log_config, cli.verbose)?;
    Ok(settings)
}

fn run(cli: Cli) -> CliResult<()> {
    let format: OutputFormat = cli.format.into();

    let output = match &cli.command {
        Commands::Run {
            dry_run,
            move_processed,
            move_skipped,
        } => {
            let settings = load_settings(&cli)?;
            let options = RunOptions {
                dry_run: *dry_run,
                move_processed: *move_processed,
                move_skipped: *move_skipped,
            };
            commands::run(&settings, format, options)?
        }

        Commands::Inspect { file } => {
            let settings = load_settings(&cli)?;
            commands::inspect(&settings, format, file)?
        }

        Commands::Init { force } => {
            let path = cli.config.clone().unwrap_or_else(default_settings_path);
            commands::init(&path, format, *force)?
        }

        Commands::Completions { shell } => commands::completions(*shell)?,
    };

    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
