//! Pause the VPN and auto-reconnect after an interval
//!
//! The only place the session layer and the routine primitive meet: a
//! pause disconnects right away and schedules a delayed routine whose
//! task reconnects to the last used server. At most one routine is
//! live at a time; starting a new pause cancels the previous one
//! first, and so must any user-initiated connect, or the delayed
//! reconnect could race it.

use crate::error::NordError;
use crate::routine::{Routine, RoutineState};
use crate::vpn::connector::NordConnector;
use crate::vpn::process::CommandRunner;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use thiserror::Error;

pub const SECONDS_IN_A_MINUTE: u64 = 60;

/// Failures starting a pause
///
/// A schedule failure means the disconnect already happened but no
/// reconnect is pending; the caller has to tell the user to reconnect
/// manually.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PauseError {
    #[error("failed to disconnect before pausing: {0}")]
    Disconnect(#[from] NordError),

    #[error("failed to schedule the reconnect routine")]
    Schedule,
}

/// Pause/auto-reconnect feature over a shared connector
pub struct PauseControl<R: CommandRunner + Send + 'static> {
    connector: Arc<Mutex<NordConnector<R>>>,
    routine: Option<Routine>,
}

impl<R: CommandRunner + Send + 'static> PauseControl<R> {
    pub fn new(connector: Arc<Mutex<NordConnector<R>>>) -> Self {
        Self {
            connector,
            routine: None,
        }
    }

    /// Pause for the given number of minutes
    pub fn pause_minutes(&mut self, minutes: u64) -> Result<(), PauseError> {
        self.pause_for(Duration::from_secs(minutes * SECONDS_IN_A_MINUTE))
    }

    /// Disconnect now and schedule a reconnect after `delay`
    ///
    /// Cancels a previously pending pause first. A zero delay
    /// reconnects immediately.
    pub fn pause_for(&mut self, delay: Duration) -> Result<(), PauseError> {
        self.cancel_pending();
        self.connector.lock().unwrap().disconnect()?;
        tracing::info!(?delay, "vpn paused");
        let connector = Arc::clone(&self.connector);
        let routine = Routine::spawn(delay, move || {
            let mut vpn = connector.lock().unwrap();
            if let Err(error) = vpn.reconnect() {
                tracing::warn!(%error, "scheduled reconnect failed");
            }
        })
        .ok_or(PauseError::Schedule)?;
        self.routine = Some(routine);
        Ok(())
    }

    /// Cancel a pending reconnect, if any, and report how it resolved
    ///
    /// Must be called before any manual connect while a pause is
    /// pending. If the delay already elapsed the reconnect has run (or
    /// is running) and resolves as `Finished`.
    pub fn cancel_pending(&mut self) -> Option<RoutineState> {
        self.routine.take().map(Routine::cancel)
    }

    /// Whether a scheduled reconnect is still waiting on its delay
    pub fn is_pending(&self) -> bool {
        self.routine
            .as_ref()
            .map(|routine| routine.state() == RoutineState::Running)
            .unwrap_or(false)
    }

    /// Block until the pending reconnect resolves
    pub fn wait(&mut self) -> Option<RoutineState> {
        self.routine.take().map(Routine::join)
    }
}
