//! Validated runtime configuration built from the command line

use std::path::PathBuf;
use std::time::Duration;

use mirror_core::ReconcileOptions;

use crate::cli::Cli;
use crate::error::CliError;

/// Everything the driver needs, checked once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorConfig {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub interval: Duration,
    pub log_file: PathBuf,
    pub options: ReconcileOptions,
    pub once: bool,
    pub json: bool,
}

impl TryFrom<Cli> for MirrorConfig {
    type Error = CliError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if cli.interval == 0 {
            return Err(CliError::config("interval must be a positive number of seconds"));
        }
        if cli.source == cli.destination {
            return Err(CliError::config(format!(
                "source and destination are the same directory: {}",
                cli.source.display()
            )));
        }
        // A log inside the destination would be deleted as stale every pass
        if cli.log_file_path.parent() == Some(cli.destination.as_path()) {
            return Err(CliError::config(format!(
                "log file {} must not be inside the destination directory",
                cli.log_file_path.display()
            )));
        }

        Ok(Self {
            options: ReconcileOptions::new()
                .verbose(cli.verbose)
                .on_error(cli.on_error.into()),
            interval: Duration::from_secs(cli.interval),
            source: cli.source,
            destination: cli.destination,
            log_file: cli.log_file_path,
            once: cli.once,
            json: cli.json,
        })
    }
}
