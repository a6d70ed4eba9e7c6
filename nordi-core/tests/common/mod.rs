// Shared test double for the nordvpn process boundary.
//
// Replaces only the spawn-and-capture step: every expected call is
// scripted with the exact argv and a canned (result, text) pair. Any
// argv mismatch or unexpected call fails the test instead of passing
// silently.

use nordi_core::error::{NordError, Result};
use nordi_core::vpn::CommandRunner;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

struct ScriptedCall {
    argv: Vec<&'static str>,
    result: Result<String>,
}

/// Scripted stand-in for the nordvpn binary
///
/// Clones share the same script, so one handle can be moved into a
/// connector while the test keeps another for assertions.
#[derive(Clone)]
pub struct ScriptedRunner {
    calls: Arc<Mutex<VecDeque<ScriptedCall>>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Queue the next expected call and its scripted outcome
    pub fn expect(&self, argv: &[&'static str], result: std::result::Result<&str, NordError>) {
        self.calls.lock().unwrap().push_back(ScriptedCall {
            argv: argv.to_vec(),
            result: result.map(str::to_string),
        });
    }

    /// Assert that every scripted call was actually made
    pub fn assert_drained(&self) {
        let remaining = self.calls.lock().unwrap().len();
        assert_eq!(remaining, 0, "{} scripted nordvpn calls never happened", remaining);
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, args: &[&str]) -> Result<String> {
        let call = self
            .calls
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected nordvpn call: {:?}", args));
        assert_eq!(call.argv, args, "nordvpn argv mismatch");
        call.result
    }
}

// Canned nordvpn output fixtures.

pub const VERSION_OUT: &str = "NordVPN Version 3.16.0\n";

pub const ACCOUNT_LOGGED_IN: &str = "Account Information:\n\
    Email Address: user@mail.com\n\
    VPN Service: Active (Expires on Jan 1st, 2030)\n";

pub const ACCOUNT_LOGGED_OUT: &str = "You are not logged in.\n";

pub const STATUS_CONNECTED: &str = "Status: Connected\n\
    Hostname: ab999.nordvpn.com\n\
    IP: 1.2.3.4\n\
    Country: Portugal\n\
    City: Lisbon\n\
    Current technology: NORDLYNX\n\
    Current protocol: UDP\n";

pub const STATUS_DISCONNECTED: &str = "Status: Disconnected\n";
