//! Sync log capability
//!
//! Every pass reports its start, each copy and removal, and its end to a
//! [`SyncLogger`]. The file-backed implementation appends one timestamped
//! line per event.

use std::ffi::OsStr;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use fs2::FileExt;

use crate::{Error, Result};

/// Timestamp layout of each sync log line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single reportable event of a pass.
#[derive(Debug, Clone, Copy)]
pub enum LogEvent<'a> {
    SyncStarted {
        source: &'a Path,
        destination: &'a Path,
    },
    Copying {
        name: &'a OsStr,
        source: &'a Path,
        destination: &'a Path,
    },
    Removing {
        name: &'a OsStr,
        destination: &'a Path,
    },
    SyncCompleted {
        source: &'a Path,
        destination: &'a Path,
    },
    OperationFailed {
        verb: &'static str,
        name: &'a OsStr,
        error: &'a dyn std::error::Error,
    },
}

impl std::fmt::Display for LogEvent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SyncStarted {
                source,
                destination,
            } => write!(
                f,
                "Syncing files from {} to {}",
                source.display(),
                destination.display()
            ),
            Self::Copying {
                name,
                source,
                destination,
            } => write!(
                f,
                "Copying {} from {} to {}",
                name.to_string_lossy(),
                source.display(),
                destination.display()
            ),
            Self::Removing { name, destination } => write!(
                f,
                "Removing {} from {}",
                name.to_string_lossy(),
                destination.display()
            ),
            Self::SyncCompleted {
                source,
                destination,
            } => write!(
                f,
                "Sync completed from {} to {}",
                source.display(),
                destination.display()
            ),
            // Name is already on the line; show only the cause
            Self::OperationFailed { verb, name, error } => {
                let name = name.to_string_lossy();
                match error.source() {
                    Some(cause) => write!(f, "Failed to {verb} {name}: {cause}"),
                    None => write!(f, "Failed to {verb} {name}: {error}"),
                }
            }
        }
    }
}

/// Receiver of sync events.
///
/// Implementors only need [`SyncLogger::log`]; the per-event methods build
/// the matching [`LogEvent`] and forward to it.
pub trait SyncLogger {
    /// Record one event.
    fn log(&mut self, event: &LogEvent<'_>) -> Result<()>;

    fn sync_started(&mut self, source: &Path, destination: &Path) -> Result<()> {
        self.log(&LogEvent::SyncStarted {
            source,
            destination,
        })
    }

    fn copying(&mut self, name: &OsStr, source: &Path, destination: &Path) -> Result<()> {
        self.log(&LogEvent::Copying {
            name,
            source,
            destination,
        })
    }

    fn removing(&mut self, name: &OsStr, destination: &Path) -> Result<()> {
        self.log(&LogEvent::Removing { name, destination })
    }

    fn sync_completed(&mut self, source: &Path, destination: &Path) -> Result<()> {
        self.log(&LogEvent::SyncCompleted {
            source,
            destination,
        })
    }

    fn operation_failed(
        &mut self,
        verb: &'static str,
        name: &OsStr,
        error: &dyn std::error::Error,
    ) -> Result<()> {
        self.log(&LogEvent::OperationFailed { verb, name, error })
    }
}

impl<L: SyncLogger + ?Sized> SyncLogger for &mut L {
    fn log(&mut self, event: &LogEvent<'_>) -> Result<()> {
        (**self).log(event)
    }
}

impl<L: SyncLogger + ?Sized> SyncLogger for Box<L> {
    fn log(&mut self, event: &LogEvent<'_>) -> Result<()> {
        (**self).log(event)
    }
}

/// Appends `YYYY-MM-DD HH:MM:SS: <message>` lines to a log file.
///
/// The file is opened in append mode for every event and created if it
/// does not exist. An advisory exclusive lock is held while the line is
/// written so concurrent mirrors sharing one log do not interleave.
#[derive(Debug, Clone)]
pub struct FileLogger {
    path: PathBuf,
}

impl FileLogger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append_line(&self, message: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| Error::log(&self.path, e))?;

        FileExt::lock_exclusive(&file).map_err(|e| Error::log(&self.path, e))?;

        let line = format!("{}: {}\n", Local::now().format(TIMESTAMP_FORMAT), message);
        file.write_all(line.as_bytes())
            .map_err(|e| Error::log(&self.path, e))?;

        // Lock is released when the handle closes
        Ok(())
    }
}

impl SyncLogger for FileLogger {
    fn log(&mut self, event: &LogEvent<'_>) -> Result<()> {
        self.append_line(&event.to_string())
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl SyncLogger for NullLogger {
    fn log(&mut self, _event: &LogEvent<'_>) -> Result<()> {
        Ok(())
    }
}
