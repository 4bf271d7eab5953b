//! Fixed-interval poll loop
//!
//! The driver alternates between `Idle` and `Syncing` forever, invoking the
//! reconciler once per interval. It blocks the calling thread while it
//! sleeps and has no cancellation point inside a pass.

use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use crate::logger::SyncLogger;
use crate::reconcile::{PassResult, Reconciler};
use crate::{Error, Result};

/// Where the driver is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Syncing,
}

type Observer = Box<dyn FnMut(&PassResult)>;

/// Invokes [`Reconciler::reconcile`] on a timer.
pub struct Driver<L> {
    reconciler: Reconciler<L>,
    source: PathBuf,
    destination: PathBuf,
    interval: Duration,
    state: DriverState,
    observer: Option<Observer>,
}

impl<L: SyncLogger> Driver<L> {
    /// Create a driver for one source/destination pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `interval` is zero.
    pub fn new(
        reconciler: Reconciler<L>,
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        interval: Duration,
    ) -> Result<Self> {
        if interval.is_zero() {
            return Err(Error::InvalidConfig {
                message: "interval must be greater than zero".into(),
            });
        }

        Ok(Self {
            reconciler,
            source: source.into(),
            destination: destination.into(),
            interval,
            state: DriverState::Idle,
            observer: None,
        })
    }

    /// Call `observer` with the result of every completed pass.
    pub fn with_observer(mut self, observer: impl FnMut(&PassResult) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn reconciler(&self) -> &Reconciler<L> {
        &self.reconciler
    }

    /// Run a single pass.
    ///
    /// Returns `Ok(None)` when the pass ended early on a non-fatal error;
    /// the next pass starts over from fresh snapshots.
    ///
    /// # Errors
    ///
    /// Fatal errors (see [`Error::is_fatal`]) are returned to the caller.
    pub fn run_pass(&mut self) -> Result<Option<PassResult>> {
        self.state = DriverState::Syncing;
        let outcome = self.reconciler.reconcile(&self.source, &self.destination);
        self.state = DriverState::Idle;

        match outcome {
            Ok(pass) => {
                if let Some(observer) = self.observer.as_mut() {
                    observer(&pass);
                }
                Ok(Some(pass))
            }
            Err(e) if e.is_fatal() => Err(e),
            Err(e) => {
                tracing::warn!(error = %e, "Sync pass aborted; retrying next interval");
                Ok(None)
            }
        }
    }

    /// Run `passes` passes, sleeping the interval between consecutive ones.
    ///
    /// # Errors
    ///
    /// Stops at the first fatal error.
    pub fn run_passes(&mut self, passes: u64) -> Result<Vec<Option<PassResult>>> {
        let mut results = Vec::new();
        for i in 0..passes {
            if i > 0 {
                thread::sleep(self.interval);
            }
            results.push(self.run_pass()?);
        }
        Ok(results)
    }

    /// Loop until a fatal error occurs.
    pub fn run_forever(&mut self) -> Result<Infallible> {
        loop {
            self.run_pass()?;
            tracing::debug!(interval = ?self.interval, "Waiting for next pass");
            thread::sleep(self.interval);
        }
    }
}
