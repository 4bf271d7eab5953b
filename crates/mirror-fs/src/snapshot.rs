//! Flat directory listings
//!
//! A snapshot is the set of entry names directly inside one directory at
//! the moment of listing. Files and subdirectories are not distinguished.

use std::collections::BTreeSet;
use std::collections::btree_set;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Entry names present directly inside a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorySnapshot {
    root: PathBuf,
    names: BTreeSet<OsString>,
}

impl DirectorySnapshot {
    /// List the direct children of `root`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectoryAccess`] if `root` is missing, is not a
    /// directory, or cannot be read. A missing directory is never treated
    /// as empty.
    pub fn take(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let entries = fs::read_dir(&root).map_err(|e| Error::directory_access(&root, e))?;

        let mut names = BTreeSet::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::directory_access(&root, e))?;
            names.insert(entry.file_name());
        }

        tracing::debug!(path = %root.display(), entries = names.len(), "Took directory snapshot");
        Ok(Self { root, names })
    }

    /// Build a snapshot from known names without touching the filesystem.
    pub fn from_names<I, N>(root: impl Into<PathBuf>, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<OsString>,
    {
        Self {
            root: root.into(),
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The directory this snapshot was taken of.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of an entry inside the snapshotted directory.
    pub fn path_of(&self, name: &OsStr) -> PathBuf {
        self.root.join(name)
    }

    pub fn contains(&self, name: &OsStr) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, OsString> {
        self.names.iter()
    }

    /// Names present in this snapshot but absent from `other`.
    pub fn difference<'a>(&'a self, other: &'a Self) -> impl Iterator<Item = &'a OsString> + 'a {
        self.names.difference(&other.names)
    }
}

impl<'a> IntoIterator for &'a DirectorySnapshot {
    type Item = &'a OsString;
    type IntoIter = btree_set::Iter<'a, OsString>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
