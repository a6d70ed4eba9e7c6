// Unit tests for the pause/auto-reconnect feature

mod common;

use common::{
    ScriptedRunner, ACCOUNT_LOGGED_IN, ACCOUNT_LOGGED_OUT, STATUS_CONNECTED, STATUS_DISCONNECTED,
    VERSION_OUT,
};
use nordi_core::routine::RoutineState;
use nordi_core::vpn::{NordConnector, PauseControl};
use std::sync::{Arc, Mutex};
use std::time::Duration;

type SharedConnector = Arc<Mutex<NordConnector<ScriptedRunner>>>;

fn open_shared(account: &'static str, status: &'static str) -> (SharedConnector, ScriptedRunner) {
    let runner = ScriptedRunner::new();
    runner.expect(&["version"], Ok(VERSION_OUT));
    runner.expect(&["account"], Ok(account));
    runner.expect(&["status"], Ok(status));
    let mut vpn = NordConnector::with_runner(runner.clone());
    vpn.open().expect("open failed");
    (Arc::new(Mutex::new(vpn)), runner)
}

fn expect_disconnect(runner: &ScriptedRunner) {
    runner.expect(&["d"], Ok("You are disconnected.\n"));
    runner.expect(&["status"], Ok(STATUS_DISCONNECTED));
}

#[test]
fn test_pause_disconnects_immediately() {
    let (vpn, runner) = open_shared(ACCOUNT_LOGGED_IN, STATUS_CONNECTED);
    let mut pause = PauseControl::new(Arc::clone(&vpn));
    expect_disconnect(&runner);

    pause.pause_for(Duration::from_secs(60)).expect("pause failed");

    assert!(!vpn.lock().unwrap().host().online);
    assert!(pause.is_pending());
    assert_eq!(pause.cancel_pending(), Some(RoutineState::Canceled));
    runner.assert_drained();
}

#[test]
fn test_cancel_before_expiry_skips_reconnect() {
    let (vpn, runner) = open_shared(ACCOUNT_LOGGED_IN, STATUS_CONNECTED);
    let mut pause = PauseControl::new(Arc::clone(&vpn));
    expect_disconnect(&runner);

    pause.pause_for(Duration::from_secs(60)).expect("pause failed");
    assert_eq!(pause.cancel_pending(), Some(RoutineState::Canceled));

    // no reconnect calls were scripted, so a late routine firing would
    // have panicked the runner
    assert!(!vpn.lock().unwrap().host().online);
    assert!(!pause.is_pending());
    runner.assert_drained();
}

#[test]
fn test_short_pause_reconnects_to_last_server() {
    let (vpn, runner) = open_shared(ACCOUNT_LOGGED_IN, STATUS_CONNECTED);
    let mut pause = PauseControl::new(Arc::clone(&vpn));
    expect_disconnect(&runner);
    runner.expect(&["c", "ab999"], Ok("Connecting...\n"));
    runner.expect(&["status"], Ok(STATUS_CONNECTED));

    pause.pause_for(Duration::from_millis(50)).expect("pause failed");

    assert_eq!(pause.wait(), Some(RoutineState::Finished));
    assert!(vpn.lock().unwrap().host().online);
    runner.assert_drained();
}

#[test]
fn test_zero_delay_reconnects_immediately() {
    let (vpn, runner) = open_shared(ACCOUNT_LOGGED_IN, STATUS_CONNECTED);
    let mut pause = PauseControl::new(Arc::clone(&vpn));
    expect_disconnect(&runner);
    runner.expect(&["c", "ab999"], Ok("Connecting...\n"));
    runner.expect(&["status"], Ok(STATUS_CONNECTED));

    pause.pause_minutes(0).expect("pause failed");

    assert_eq!(pause.wait(), Some(RoutineState::Finished));
    assert!(vpn.lock().unwrap().host().online);
    runner.assert_drained();
}

#[test]
fn test_new_pause_cancels_previous_routine() {
    let (vpn, runner) = open_shared(ACCOUNT_LOGGED_IN, STATUS_CONNECTED);
    let mut pause = PauseControl::new(Arc::clone(&vpn));
    expect_disconnect(&runner);
    pause.pause_for(Duration::from_secs(60)).expect("pause failed");

    // starting over must first cancel the pending reconnect, leaving
    // exactly one routine live
    expect_disconnect(&runner);
    pause.pause_for(Duration::from_secs(60)).expect("pause failed");

    assert!(pause.is_pending());
    assert_eq!(pause.cancel_pending(), Some(RoutineState::Canceled));
    runner.assert_drained();
}

#[test]
fn test_pause_works_while_logged_out() {
    // pausing only needs an open session, not a logged-in account
    let (vpn, runner) = open_shared(ACCOUNT_LOGGED_OUT, STATUS_CONNECTED);
    let mut pause = PauseControl::new(Arc::clone(&vpn));
    expect_disconnect(&runner);

    pause.pause_for(Duration::from_secs(60)).expect("pause failed");
    assert!(pause.is_pending());
    assert_eq!(pause.cancel_pending(), Some(RoutineState::Canceled));
    runner.assert_drained();
}

#[test]
fn test_pause_surfaces_disconnect_failure() {
    use nordi_core::error::NordError;
    use nordi_core::vpn::PauseError;

    let (vpn, runner) = open_shared(ACCOUNT_LOGGED_IN, STATUS_CONNECTED);
    let mut pause = PauseControl::new(Arc::clone(&vpn));
    runner.expect(&["d"], Err(NordError::FailedExecute));

    assert_eq!(
        pause.pause_for(Duration::from_secs(60)),
        Err(PauseError::Disconnect(NordError::FailedExecute))
    );
    assert!(!pause.is_pending());
    runner.assert_drained();
}
