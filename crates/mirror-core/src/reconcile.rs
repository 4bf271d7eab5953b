//! One reconciliation pass
//!
//! A pass snapshots the source and destination, walks the source entries
//! (creating or updating), then walks destination-only entries (deleting).
//! Every operation is logged and applied as soon as it is decided. Nothing
//! is carried over between passes.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use mirror_fs::{DirectorySnapshot, Fingerprint, copy_entry, remove_entry};
use serde::Serialize;

use crate::Result;
use crate::logger::{LogEvent, SyncLogger};
use crate::operation::{OperationKind, SyncOperation, classify};
use crate::options::{FailurePolicy, ReconcileOptions};

/// A single entry that could not be mirrored during a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationFailure {
    /// `copy`, `remove` or `hash`
    pub verb: String,
    pub name: String,
    pub message: String,
}

/// Outcome of one pass.
#[derive(Debug, Clone, Serialize)]
pub struct PassResult {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Operations that completed, in the order applied
    pub applied: Vec<SyncOperation>,
    /// Entries skipped because an operation on them failed
    pub failures: Vec<OperationFailure>,
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,
}

impl PassResult {
    fn begin(source: &Path, destination: &Path) -> Self {
        let now = Local::now();
        Self {
            source: source.to_path_buf(),
            destination: destination.to_path_buf(),
            applied: Vec::new(),
            failures: Vec::new(),
            started_at: now,
            finished_at: now,
        }
    }

    /// True when every decided operation was applied.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn operation_count(&self) -> usize {
        self.applied.len()
    }

    pub fn count(&self, kind: OperationKind) -> usize {
        self.applied.iter().filter(|op| op.kind() == kind).count()
    }
}

/// Makes a destination directory mirror a source directory.
///
/// Holds no state between passes besides its options and logger.
pub struct Reconciler<L> {
    options: ReconcileOptions,
    logger: L,
}

impl<L: SyncLogger> Reconciler<L> {
    pub fn new(options: ReconcileOptions, logger: L) -> Self {
        Self { options, logger }
    }

    pub fn options(&self) -> &ReconcileOptions {
        &self.options
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    pub fn into_logger(self) -> L {
        self.logger
    }

    /// Run one pass making `destination` match `source`.
    ///
    /// # Errors
    ///
    /// - A missing or unreadable directory fails the pass before any entry
    ///   is touched.
    /// - A sync log write failure fails the pass.
    /// - With [`FailurePolicy::Abort`], the first failing copy, removal or
    ///   fingerprint fails the pass. With [`FailurePolicy::Continue`] such
    ///   failures are recorded in [`PassResult::failures`] instead.
    pub fn reconcile(&mut self, source: &Path, destination: &Path) -> Result<PassResult> {
        tracing::info!(
            source = %source.display(),
            destination = %destination.display(),
            "Starting sync pass"
        );
        let mut pass = PassResult::begin(source, destination);
        self.emit(&LogEvent::SyncStarted {
            source,
            destination,
        })?;

        let src = DirectorySnapshot::take(source)?;
        let dst = DirectorySnapshot::take(destination)?;
        let mut fingerprint = Fingerprint::of_file;

        for name in &src {
            match classify(name, &src, &dst, &mut fingerprint) {
                Ok(Some(op)) => self.apply(op, &src, &dst, &mut pass)?,
                Ok(None) => {}
                Err(e) => self.record_failure("hash", name, e, &mut pass)?,
            }
        }

        for name in dst.difference(&src) {
            self.apply(SyncOperation::Delete(name.clone()), &src, &dst, &mut pass)?;
        }

        self.emit(&LogEvent::SyncCompleted {
            source,
            destination,
        })?;
        pass.finished_at = Local::now();

        tracing::info!(
            created = pass.count(OperationKind::Create),
            updated = pass.count(OperationKind::Update),
            deleted = pass.count(OperationKind::Delete),
            failed = pass.failures.len(),
            "Sync pass completed"
        );
        Ok(pass)
    }

    fn apply(
        &mut self,
        op: SyncOperation,
        src: &DirectorySnapshot,
        dst: &DirectorySnapshot,
        pass: &mut PassResult,
    ) -> Result<()> {
        let name = op.name();
        let outcome = match op.kind() {
            OperationKind::Create | OperationKind::Update => {
                self.emit(&LogEvent::Copying {
                    name,
                    source: src.root(),
                    destination: dst.root(),
                })?;
                copy_entry(src.root(), dst.root(), name).map(drop)
            }
            OperationKind::Delete => {
                self.emit(&LogEvent::Removing {
                    name,
                    destination: dst.root(),
                })?;
                remove_entry(dst.root(), name)
            }
        };

        match outcome {
            Ok(()) => {
                tracing::debug!(operation = %op, "Applied");
                pass.applied.push(op);
                Ok(())
            }
            Err(e) => self.record_failure(op.verb(), op.name(), e, pass),
        }
    }

    fn record_failure(
        &mut self,
        verb: &'static str,
        name: &OsStr,
        error: mirror_fs::Error,
        pass: &mut PassResult,
    ) -> Result<()> {
        tracing::warn!(name = %name.to_string_lossy(), error = %error, "Failed to {verb} entry");
        self.emit(&LogEvent::OperationFailed {
            verb,
            name,
            error: &error,
        })?;

        match self.options.on_error {
            FailurePolicy::Continue => {
                pass.failures.push(OperationFailure {
                    verb: verb.to_string(),
                    name: name.to_string_lossy().into_owned(),
                    message: error.to_string(),
                });
                Ok(())
            }
            FailurePolicy::Abort => Err(error.into()),
        }
    }

    fn emit(&mut self, event: &LogEvent<'_>) -> Result<()> {
        if self.options.verbose {
            println!("{event}");
        }
        self.logger.log(event)
    }
}
