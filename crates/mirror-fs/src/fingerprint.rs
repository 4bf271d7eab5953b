//! SHA-256 content fingerprints
//!
//! Two files hold the same content iff their fingerprints are bit-equal.
//! Fingerprints are computed on demand and never cached.

use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use crate::{Error, Result};

/// Prefix of the canonical textual form
const PREFIX: &str = "sha256:";

/// Digest of a file's full byte content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Fingerprint in-memory content.
    pub fn of_bytes(content: &[u8]) -> Self {
        Self(Sha256::digest(content).into())
    }

    /// Fingerprint a file by streaming its whole content through the hasher.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Hash`] if the file cannot be opened or read,
    /// including when `path` names a directory.
    pub fn of_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::hash(path, e))?;
        let mut reader = BufReader::new(file);
        let mut hasher = Sha256::new();
        io::copy(&mut reader, &mut hasher).map_err(|e| Error::hash(path, e))?;
        Ok(Self(hasher.finalize().into()))
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(PREFIX)?;
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
