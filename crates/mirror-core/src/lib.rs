//! Core mirroring logic for dirmirror
//!
//! This crate provides:
//! - **operation**: the create/update/delete classification of entries
//! - **reconcile**: one stateless pass making a destination match a source
//! - **logger**: the sync log capability and its file-backed implementation
//! - **driver**: the fixed-interval loop invoking passes

pub mod driver;
pub mod error;
pub mod logger;
pub mod operation;
pub mod options;
pub mod reconcile;

pub use driver::{Driver, DriverState};
pub use error::{Error, Result};
pub use logger::{FileLogger, LogEvent, NullLogger, SyncLogger};
pub use operation::{OperationKind, SyncOperation, plan};
pub use options::{FailurePolicy, ReconcileOptions};
pub use reconcile::{OperationFailure, PassResult, Reconciler};
