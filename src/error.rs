use std::sync::PoisonError;

use thiserror::Error;

use crate::role::Role;

/// Faults a trial can surface. There is no recovery path: callers report
/// the error and stop.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateError {
    /// A thread panicked while holding the lock, poisoning the shared
    /// state for everyone else.
    #[error("shared state poisoned by a panicked lock holder")]
    Poisoned,

    /// A worker thread panicked; its join handle carried no result.
    #[error("{0} worker panicked before completing its phase")]
    WorkerPanicked(Role),
}

impl<T> From<PoisonError<T>> for GateError {
    fn from(_: PoisonError<T>) -> Self {
        GateError::Poisoned
    }
}
