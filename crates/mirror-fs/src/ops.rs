//! Single-entry mutations applied to the destination directory
//!
//! No locking is taken around these calls; concurrent writers to the same
//! destination can race with them.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use crate::{Error, FileOp, Result};

/// Copy `name` from `src_dir` into `dst_dir`, overwriting any existing file.
///
/// Copies content and permission bits. Returns the number of bytes copied.
///
/// # Errors
///
/// Returns [`Error::FileOperation`] if the source cannot be read (including
/// when it vanished or is a directory) or the destination cannot be written.
pub fn copy_entry(src_dir: &Path, dst_dir: &Path, name: &OsStr) -> Result<u64> {
    let from = src_dir.join(name);
    let to = dst_dir.join(name);

    let bytes = fs::copy(&from, &to).map_err(|e| Error::file_operation(FileOp::Copy, &from, e))?;
    tracing::debug!(from = %from.display(), to = %to.display(), bytes, "Copied entry");
    Ok(bytes)
}

/// Remove `name` from `dst_dir`.
///
/// # Errors
///
/// Returns [`Error::FileOperation`] if the entry cannot be removed. A
/// subdirectory is not removed and yields an error.
pub fn remove_entry(dst_dir: &Path, name: &OsStr) -> Result<()> {
    let path = dst_dir.join(name);

    fs::remove_file(&path).map_err(|e| Error::file_operation(FileOp::Remove, &path, e))?;
    tracing::debug!(path = %path.display(), "Removed entry");
    Ok(())
}
