//! Ordered execution with a mutex and condition variable.
//!
//! Two worker threads and a controller share one accumulator. A phase
//! counter behind a single lock admits them to the critical section in a
//! fixed order: multiply first, then add, then the controller's read.
//! Every waiter re-checks its trigger after each wake, so the order holds
//! no matter how the threads are scheduled.
//!
//! Run with: cargo run

pub mod error;
pub mod gate;
pub mod role;

pub use error::GateError;
pub use gate::{PhaseGate, TrialReport};
pub use role::Role;

/// How many independent trials the binary runs.
pub const TRIALS: usize = 10;
