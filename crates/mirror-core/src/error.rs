//! Error types for mirror-core

use std::path::PathBuf;

/// Result type for mirror-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in mirror-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem error from mirror-fs
    #[error(transparent)]
    Fs(#[from] mirror_fs::Error),

    /// The sync log could not be written
    #[error("Failed to write sync log {path}: {source}")]
    Log {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rejected driver or reconciler configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl Error {
    pub fn log(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Log {
            path: path.into(),
            source,
        }
    }

    /// Whether this error must stop the poll loop rather than just the
    /// current pass.
    ///
    /// Unreadable source/destination directories, an unwritable sync log and
    /// bad configuration are fatal. Single-entry failures are not: the next
    /// pass starts from fresh snapshots.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Fs(mirror_fs::Error::DirectoryAccess { .. }) => true,
            Self::Fs(_) => false,
            Self::Log { .. } | Self::InvalidConfig { .. } => true,
        }
    }
}
