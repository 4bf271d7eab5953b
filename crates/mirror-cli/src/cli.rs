//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use mirror_core::FailurePolicy;

/// dirmirror - Keep a destination directory identical to a source directory
#[derive(Parser, Debug)]
#[command(name = "dirmirror")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to mirror from
    #[arg(env = "DIRMIRROR_SOURCE")]
    pub source: PathBuf,

    /// Directory to mirror into
    #[arg(env = "DIRMIRROR_DESTINATION")]
    pub destination: PathBuf,

    /// Seconds to wait between sync passes
    #[arg(env = "DIRMIRROR_INTERVAL", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,

    /// Append-only sync log file (created if absent)
    #[arg(env = "DIRMIRROR_LOG_FILE")]
    pub log_file_path: PathBuf,

    /// Also print sync log lines to stdout
    #[arg(short, long, env = "DIRMIRROR_VERBOSE")]
    pub verbose: bool,

    /// What to do when copying, removing or hashing one entry fails
    #[arg(long, value_enum, default_value_t = OnError::Continue, env = "DIRMIRROR_ON_ERROR")]
    pub on_error: OnError,

    /// Run a single pass and exit
    #[arg(long)]
    pub once: bool,

    /// Print each pass result as a JSON line on stdout
    #[arg(long)]
    pub json: bool,
}

/// Per-entry failure handling
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnError {
    /// Log the failure and continue with the next entry
    Continue,
    /// Abort the pass; the next pass retries
    Abort,
}

impl From<OnError> for FailurePolicy {
    fn from(value: OnError) -> Self {
        match value {
            OnError::Continue => Self::Continue,
            OnError::Abort => Self::Abort,
        }
    }
}
