//! Filesystem primitives for dirmirror
//!
//! Provides flat directory snapshots, content fingerprints and the
//! single-entry copy/remove operations the reconciler applies.

pub mod error;
pub mod fingerprint;
pub mod ops;
pub mod snapshot;

pub use error::{Error, FileOp, Result};
pub use fingerprint::Fingerprint;
pub use ops::{copy_entry, remove_entry};
pub use snapshot::DirectorySnapshot;
