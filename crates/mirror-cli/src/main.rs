//! dirmirror CLI
//!
//! Periodically mirrors a source directory into a destination directory and
//! records every change to an append-only log. Runs until killed; a missing
//! source or destination directory, or an unwritable log, ends the process
//! with status 1.

mod cli;
mod config;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use mirror_core::{Driver, FileLogger, PassResult, Reconciler};

use cli::Cli;
use config::MirrorConfig;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    tracing::debug!(?cli, "Parsed arguments");

    let config = MirrorConfig::try_from(cli)?;
    let reconciler = Reconciler::new(config.options, FileLogger::new(&config.log_file));
    let mut driver = Driver::new(
        reconciler,
        &config.source,
        &config.destination,
        config.interval,
    )?;

    if config.json {
        driver = driver.with_observer(|pass| {
            if let Err(e) = print_json(pass) {
                tracing::warn!(error = %e, "Failed to print pass report");
            }
        });
    }

    if config.once {
        return match driver.run_pass()? {
            Some(pass) if pass.is_clean() => Ok(()),
            Some(pass) => Err(CliError::user(format!(
                "{} entries could not be mirrored",
                pass.failures.len()
            ))),
            None => Err(CliError::user("sync pass aborted")),
        };
    }

    match driver.run_forever()? {}
}

fn print_json(pass: &PassResult) -> Result<()> {
    println!("{}", serde_json::to_string(pass)?);
    Ok(())
}
