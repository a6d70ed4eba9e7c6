//! Cancellable single-shot delayed routines
//!
//! A routine runs a task once on its own thread, optionally after a
//! delay. A delayed routine races its timer against an explicit cancel
//! signal: whichever wins decides whether the task runs at all.
//! Cancellation is strictly a race against the delay, never a kill
//! switch on a task that already started.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Lifecycle state of a routine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutineState {
    /// Waiting for the delay or executing the task
    Running,

    /// The task ran to completion exactly once
    Finished,

    /// The routine was canceled before the delay elapsed
    Canceled,
}

/// A single-shot background task with an optional, cancellable delay
///
/// `join` and `cancel` consume the routine, so its worker thread is
/// reaped exactly once and a second join cannot compile.
pub struct Routine {
    cancel: Sender<()>,
    handle: JoinHandle<()>,
    state: Arc<Mutex<RoutineState>>,
}

impl Routine {
    /// Spawn a routine that runs `task` once after `delay`
    ///
    /// A zero delay runs the task immediately; such a routine cannot
    /// be canceled. With a positive delay the worker waits on the
    /// cancel channel with the delay as timeout: a timeout means "not
    /// canceled" and runs the task, an early signal skips it.
    ///
    /// Returns `None` if the worker thread could not be created; no
    /// partially initialized routine is ever handed to the caller.
    pub fn spawn<F>(delay: Duration, task: F) -> Option<Routine>
    where
        F: FnOnce() + Send + 'static,
    {
        let (cancel, canceled) = mpsc::channel();
        let state = Arc::new(Mutex::new(RoutineState::Running));
        let task_state = Arc::clone(&state);
        let worker = thread::Builder::new().name("nordi-routine".into());
        let handle = worker
            .spawn(move || {
                let fire = delay.is_zero()
                    || matches!(canceled.recv_timeout(delay), Err(RecvTimeoutError::Timeout));
                if fire {
                    task();
                    *task_state.lock().unwrap() = RoutineState::Finished;
                } else {
                    *task_state.lock().unwrap() = RoutineState::Canceled;
                }
            })
            .ok()?;
        Some(Routine {
            cancel,
            handle,
            state,
        })
    }

    /// Current lifecycle state
    pub fn state(&self) -> RoutineState {
        *self.state.lock().unwrap()
    }

    /// Block until the routine resolves and release its resources
    pub fn join(self) -> RoutineState {
        if self.handle.join().is_err() {
            tracing::error!("routine worker panicked");
        }
        let state = *self.state.lock().unwrap();
        state
    }

    /// Signal cancellation, then join
    ///
    /// Only prevents the task if the delay has not elapsed yet; a task
    /// that already started or finished is unaffected and the routine
    /// still resolves as `Finished`.
    pub fn cancel(self) -> RoutineState {
        // send fails only if the worker already resolved, which is fine
        let _ = self.cancel.send(());
        self.join()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_immediate_routine_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let routine = Routine::spawn(Duration::ZERO, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .expect("failed to spawn routine");

        assert_eq!(routine.join(), RoutineState::Finished);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_delayed_routine_cancel_skips_task() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let routine = Routine::spawn(Duration::from_secs(60), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .expect("failed to spawn routine");

        assert_eq!(routine.state(), RoutineState::Running);
        assert_eq!(routine.cancel(), RoutineState::Canceled);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
