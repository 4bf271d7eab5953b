//! Shared test utilities for the dirmirror workspace.
//!
//! This crate provides standardised fixtures so crate test suites do not
//! each rebuild source/destination directory pairs by hand. It is a
//! dev-dependency only and never published.
//!
//! # Modules
//!
//! - [`tree`] — [`MirrorPair`] builder for a source and destination directory
//! - [`logger`] — [`RecordingLogger`] capturing sync log messages in memory

pub mod logger;
pub mod tree;

pub use logger::RecordingLogger;
pub use tree::MirrorPair;
