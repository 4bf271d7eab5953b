//! Per-pass reconciler settings

use serde::{Deserialize, Serialize};

/// What a pass does when copying, removing or hashing one entry fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Record the failure and move on to the next entry
    #[default]
    Continue,
    /// End the pass with the failing entry's error
    Abort,
}

/// Settings passed explicitly into a [`crate::Reconciler`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Echo every sync log message to stdout as well
    pub verbose: bool,
    /// Per-entry failure handling
    pub on_error: FailurePolicy,
}

impl ReconcileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn on_error(mut self, policy: FailurePolicy) -> Self {
        self.on_error = policy;
        self
    }
}
