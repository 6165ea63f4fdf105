//! flake8-diff: report linter violations only on the lines you changed.
//!
//! This is the main entry point for the `flake8-diff` CLI. It parses
//! arguments, loads the config, resolves the linter, runs the diff engine,
//! and maps the outcome to an exit code.

mod cli;
pub mod config;
pub mod diff;
pub mod engine;
pub mod error;
pub mod exit_codes;
pub mod linter;
pub mod logging;
pub mod report;
pub mod vcs;
pub mod violation;

#[cfg(test)]
mod test_support;

use cli::Cli;
use config::{Config, RunOptions};
use engine::DiffEngine;
use error::{LintDiffError, Result};
use linter::LinterCommand;
use logging::Logger;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(cli) {
        Ok(true) => ExitCode::from(exit_codes::SUCCESS as u8),
        Ok(false) => ExitCode::from(exit_codes::VIOLATIONS_FOUND as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let logger = Logger::stderr(cli.verbosity());
    let cwd = std::env::current_dir().map_err(|e| {
        LintDiffError::UserError(format!("failed to read current directory: {}", e))
    })?;

    let options = logger.scope(|| -> Result<RunOptions> {
        let config = Config::discover(cli.config.as_deref(), &cwd)?;
        let config = cli.apply_to(config);
        config.validate()?;
        tracing::debug!("effective config:\n{}", config.to_yaml()?);
        Ok(RunOptions::new(config, cli.verbosity()))
    })?;

    // Resolved once, before any file is processed.
    let linter = logger.scope(|| {
        LinterCommand::resolve(&options.linter, options.flake8_options.as_deref(), &cwd)
    })?;

    let stdout = std::io::stdout().lock();
    let mut engine = DiffEngine::new(options, cwd, linter, stdout, logger);
    engine.process()
}
