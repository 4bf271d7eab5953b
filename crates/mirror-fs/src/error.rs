//! Error types for mirror-fs

use std::path::PathBuf;

/// Result type for mirror-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// The kind of mutation that failed on a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    Copy,
    Remove,
}

impl FileOp {
    /// Verb used in log lines and error messages.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::Remove => "remove",
        }
    }
}

impl std::fmt::Display for FileOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.verb())
    }
}

/// Errors that can occur in mirror-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A directory could not be listed
    #[error("Cannot access directory {path}: {source}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A copy or removal of one entry failed
    #[error("Failed to {op} {path}: {source}")]
    FileOperation {
        op: FileOp,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a file to fingerprint it failed
    #[error("Failed to hash {path}: {source}")]
    Hash {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn directory_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DirectoryAccess {
            path: path.into(),
            source,
        }
    }

    pub fn file_operation(op: FileOp, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOperation {
            op,
            path: path.into(),
            source,
        }
    }

    pub fn hash(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Hash {
            path: path.into(),
            source,
        }
    }

    /// The path the failing operation was working on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::DirectoryAccess { path, .. }
            | Self::FileOperation { path, .. }
            | Self::Hash { path, .. } => path,
        }
    }
}
