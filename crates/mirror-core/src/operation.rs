//! Classification of directory entries into sync operations

use std::ffi::{OsStr, OsString};
use std::path::Path;

use mirror_fs::{DirectorySnapshot, Fingerprint};
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// One change needed to make the destination match the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SyncOperation {
    /// Copy an entry the destination does not have
    Create(OsString),
    /// Overwrite a destination entry whose content differs
    Update(OsString),
    /// Remove a destination entry the source does not have
    Delete(OsString),
}

/// Discriminant of a [`SyncOperation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    Create,
    Update,
    Delete,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl SyncOperation {
    pub fn name(&self) -> &OsStr {
        match self {
            Self::Create(name) | Self::Update(name) | Self::Delete(name) => name,
        }
    }

    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Create(_) => OperationKind::Create,
            Self::Update(_) => OperationKind::Update,
            Self::Delete(_) => OperationKind::Delete,
        }
    }

    /// Verb used when reporting a failure of this operation.
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Create(_) | Self::Update(_) => "copy",
            Self::Delete(_) => "remove",
        }
    }
}

impl std::fmt::Display for SyncOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind().as_str(), self.name().to_string_lossy())
    }
}

impl Serialize for SyncOperation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SyncOperation", 2)?;
        state.serialize_field("kind", self.kind().as_str())?;
        state.serialize_field("name", &self.name().to_string_lossy())?;
        state.end()
    }
}

/// Decide what, if anything, a source entry needs.
///
/// Entries missing from the destination are created. Entries present in
/// both are updated only when their fingerprints differ; metadata such as
/// size or modification time is never consulted.
pub(crate) fn classify<F>(
    name: &OsStr,
    source: &DirectorySnapshot,
    destination: &DirectorySnapshot,
    fingerprint: &mut F,
) -> mirror_fs::Result<Option<SyncOperation>>
where
    F: FnMut(&Path) -> mirror_fs::Result<Fingerprint>,
{
    if !destination.contains(name) {
        return Ok(Some(SyncOperation::Create(name.to_owned())));
    }

    let src_fp = fingerprint(&source.path_of(name))?;
    let dst_fp = fingerprint(&destination.path_of(name))?;
    if src_fp == dst_fp {
        Ok(None)
    } else {
        tracing::trace!(name = %name.to_string_lossy(), %src_fp, %dst_fp, "Content differs");
        Ok(Some(SyncOperation::Update(name.to_owned())))
    }
}

/// Compute the operations for a pair of snapshots without applying them.
///
/// `fingerprint` is called with the full path of every entry present in
/// both snapshots; [`Fingerprint::of_file`] is the filesystem-backed choice.
/// Creates and updates come first in source order, followed by deletes in
/// destination order. A rename in the source therefore shows up as a create
/// of the new name plus a delete of the old one.
///
/// # Errors
///
/// Returns the first fingerprinting failure.
pub fn plan<F>(
    source: &DirectorySnapshot,
    destination: &DirectorySnapshot,
    mut fingerprint: F,
) -> mirror_fs::Result<Vec<SyncOperation>>
where
    F: FnMut(&Path) -> mirror_fs::Result<Fingerprint>,
{
    let mut operations = Vec::new();

    for name in source {
        if let Some(op) = classify(name, source, destination, &mut fingerprint)? {
            operations.push(op);
        }
    }

    operations.extend(
        destination
            .difference(source)
            .map(|name| SyncOperation::Delete(name.clone())),
    );

    Ok(operations)
}
