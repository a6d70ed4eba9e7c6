//! Session and host state records
//!
//! Two in-memory records rebuilt from nordvpn output on every query.
//! Both are owned by the connector that mutates them; nothing here is
//! global.

use crate::server::Country;

/// Authentication and session info for the wrapped binary
///
/// Invariant: an inactive session has every string field empty. An
/// empty `user` is the sole signal of "logged out"; there is no
/// separate flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Version string the binary reported, e.g. `NordVPN Version 3.16.0`
    pub version: String,
    /// True between a successful open and the matching close
    pub active: bool,
    /// Logged-in account identifier (email), empty when logged out
    pub user: String,
    /// Human-readable subscription status/expiry
    pub expiry: String,
}

impl Session {
    /// Whether an account is currently logged in
    pub fn is_logged_in(&self) -> bool {
        !self.user.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Session::default();
    }
}

/// Last known VPN connection identity
///
/// Invariant: while offline `ip`, `hostname` and `proto` are empty,
/// but `last_server` and `country` keep their last connected values so
/// a reconnect can target the previous server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Host {
    pub online: bool,
    pub ip: String,
    /// Full server identifier, e.g. `ab999.nordvpn.com`
    pub hostname: String,
    /// Server-group prefix of the hostname, e.g. `ab999`; survives a
    /// disconnect
    pub last_server: String,
    pub country: Option<Country>,
    /// Transport protocol name, e.g. `UDP`
    pub proto: String,
}

impl Host {
    pub fn clear(&mut self) {
        *self = Host::default();
    }
}
