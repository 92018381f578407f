use std::sync::{Condvar, Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use crate::error::GateError;
use crate::role::Role;

/// Shared state for one trial. Touched only while holding the gate's lock.
#[derive(Debug, Default)]
struct TrialState {
    /// The accumulator the workers mutate.
    value: i64,
    /// How many ordered steps have completed so far: 0, 1, or 2.
    phase: u8,
    /// Worker roles in the order they finished their critical section.
    completed: Vec<Role>,
}

/// What a finished trial reports back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialReport {
    /// Final accumulator value. 3 with the fixed trigger table.
    pub value: i64,
    /// Completion order of the two workers.
    pub order: Vec<Role>,
}

/// A lock, a condition variable, and a phase counter that admit three
/// concurrent tasks to the critical section in a fixed order.
///
/// Each task waits until the counter equals its trigger, mutates the
/// accumulator, bumps the counter, and broadcasts. Broadcast is required:
/// the waiters share one condition variable but each watches a different
/// counter value, so every wake-up must let all of them re-check.
pub struct PhaseGate {
    state: Mutex<TrialState>,
    ready: Condvar,
    stagger: Option<Duration>,
}

impl PhaseGate {
    /// A gate whose tasks run as soon as they are scheduled. The guarded
    /// wait alone enforces the order.
    pub fn new() -> Self {
        PhaseGate {
            state: Mutex::new(TrialState::default()),
            ready: Condvar::new(),
            stagger: None,
        }
    }

    /// A gate whose tasks each sleep for `stagger` before approaching the
    /// lock. Correctness never depends on this delay; it only widens the
    /// window in which all three tasks are alive at once, which is useful
    /// when observing interleavings.
    pub fn with_stagger(stagger: Duration) -> Self {
        PhaseGate {
            stagger: Some(stagger),
            ..PhaseGate::new()
        }
    }

    fn pause(&self) {
        if let Some(delay) = self.stagger {
            thread::sleep(delay);
        }
    }

    /// Guarded wait: block on the condition variable until `pred` holds,
    /// re-checking after every wake. A spurious or too-early wake-up just
    /// loops back to waiting; the caller only ever sees state satisfying
    /// the predicate, and holds the lock when it does.
    fn wait_until<F>(&self, pred: F) -> Result<MutexGuard<'_, TrialState>, GateError>
    where
        F: Fn(&TrialState) -> bool,
    {
        let guard = self.state.lock()?;
        Ok(self.ready.wait_while(guard, |state| !pred(state))?)
    }

    /// One worker's whole life: wait for this role's trigger phase, apply
    /// its mutation, advance the phase, and wake everyone still waiting.
    fn worker_step(&self, role: Role) -> Result<(), GateError> {
        self.pause();
        let mut state = self.wait_until(|state| state.phase == role.trigger())?;
        state.value = role.apply(state.value);
        state.phase += 1;
        state.completed.push(role);
        self.ready.notify_all();
        Ok(())
    }

    /// Runs one trial: resets the shared state, races the two workers, and
    /// blocks until both phases are done before reading the accumulator.
    ///
    /// Both workers are joined before this returns, so a straggler from
    /// this trial can never touch the next trial's freshly reset state.
    pub fn run_trial(&self) -> Result<TrialReport, GateError> {
        {
            let mut state = self.state.lock()?;
            state.value = 0;
            state.phase = 0;
            state.completed.clear();
        }

        thread::scope(|scope| {
            let add = scope.spawn(|| self.worker_step(Role::Add));
            let mult = scope.spawn(|| self.worker_step(Role::Multiply));

            self.pause();
            let report = {
                let state = self.wait_until(|state| state.phase == Role::Print.trigger())?;
                TrialReport {
                    value: state.value,
                    order: state.completed.clone(),
                }
            };

            add.join().map_err(|_| GateError::WorkerPanicked(Role::Add))??;
            mult.join().map_err(|_| GateError::WorkerPanicked(Role::Multiply))??;
            Ok(report)
        })
    }

    /// Runs `count` trials back to back, stopping at the first fault.
    pub fn run_trials(&self, count: usize) -> Result<Vec<TrialReport>, GateError> {
        (0..count).map(|_| self.run_trial()).collect()
    }
}

impl Default for PhaseGate {
    fn default() -> Self {
        PhaseGate::new()
    }
}
