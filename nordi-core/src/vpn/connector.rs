//! Session controller for the nordvpn binary
//!
//! Orchestrates subprocess calls and output parsing into the owned
//! `Session`/`Host` records. Operations are synchronous: each blocks
//! until the spawned binary exits and its output is read, and the
//! subprocess call always precedes any state mutation. Callers must
//! not issue overlapping operations; the single-writer contract is
//! documented, not enforced.

use crate::error::{NordError, Result};
use crate::server::Country;
use crate::vpn::parser::{self, DELIM};
use crate::vpn::process::{CommandRunner, NordvpnRunner};
use crate::vpn::state::{Host, Session};

/// Connection line plus up to six `Label: value` lines while online
const STATUS_LINE_COUNT: usize = 7;

/// Header, email line and subscription line
const ACCOUNT_LINE_COUNT: usize = 3;

const SINGLE_LINE: usize = 1;

/// A real binary identifies itself with this prefix on `version`
const VERSION_PREFIX: &str = "NordVPN";

/// The status connection line ends with this while online
const CONNECTED_SUFFIX: &str = "Connected";

/// Login links are plain-http redirects into the account portal
const LOGIN_LINK_PREFIX: &str = "http://";

/// Typed driver for the nordvpn binary
///
/// Owns the session and host records it mutates, so parallel test
/// instances never share state. Generic over the runner to allow a
/// scripted double at the process boundary.
pub struct NordConnector<R = NordvpnRunner> {
    runner: R,
    session: Session,
    host: Host,
}

impl NordConnector<NordvpnRunner> {
    pub fn new() -> Self {
        Self::with_runner(NordvpnRunner::new())
    }
}

impl Default for NordConnector<NordvpnRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> NordConnector<R> {
    pub fn with_runner(runner: R) -> Self {
        Self {
            runner,
            session: Session::default(),
            host: Host::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Open the session and synchronize with the binary
    ///
    /// Runs `version`, `account` and `status`; a failure in any step
    /// closes the session again, so opening either succeeds as a whole
    /// or leaves the session inactive. Output of `version` must start
    /// with the tool's name or the binary is not the one expected.
    /// Opening an already-active session is a no-op.
    pub fn open(&mut self) -> Result<()> {
        if self.session.active {
            tracing::debug!("session already open");
            return Ok(());
        }
        let output = self.runner.run(&["version"])?;
        let lines = parser::split_lines(&output, SINGLE_LINE);
        let version = lines.first().copied().unwrap_or("");
        if !version.starts_with(VERSION_PREFIX) {
            tracing::warn!(%version, "unexpected version banner");
            return Err(NordError::Unknown);
        }
        self.session.version = version.to_string();
        self.session.active = true;
        tracing::info!(version = %self.session.version, "session opened");
        let account = self.update_account();
        let status = self.update_status();
        if let Err(error) = account.and(status) {
            self.close();
            return Err(error);
        }
        Ok(())
    }

    /// Close the session and clear all session and host state
    ///
    /// Idempotent; closing a never-opened session is a no-op.
    pub fn close(&mut self) {
        if !self.session.active {
            return;
        }
        tracing::info!("session closed");
        self.session.clear();
        self.host.clear();
    }

    /// Re-synchronize account and status from the binary
    ///
    /// Silently does nothing while the session is inactive; otherwise
    /// both records are refreshed and the first failure is reported.
    pub fn refresh(&mut self) -> Result<()> {
        if !self.session.active {
            return Ok(());
        }
        let account = self.update_account();
        let status = self.update_status();
        account.and(status)
    }

    /// Request a browser link to log in with
    ///
    /// The link is the value of the single output line; anything not
    /// starting with `http://` is discarded as a failed execution.
    pub fn login(&mut self) -> Result<String> {
        if !self.session.active {
            return Err(NordError::NoSession);
        }
        if self.session.is_logged_in() {
            return Err(NordError::AlreadyLogged);
        }
        let output = self.runner.run(&["login"])?;
        let lines = parser::split_lines(&output, SINGLE_LINE);
        let link = parser::split_value(lines.first().copied().unwrap_or(""), DELIM);
        if !link.starts_with(LOGIN_LINK_PREFIX) {
            tracing::warn!(%link, "login did not produce a usable link");
            return Err(NordError::FailedExecute);
        }
        Ok(link.to_string())
    }

    /// Log the account out
    ///
    /// Success is judged by the refreshed state: if the user field
    /// cleared, the logout took effect even when the subprocess call
    /// itself reported a failure.
    pub fn logout(&mut self) -> Result<()> {
        if !self.session.active {
            return Err(NordError::NoSession);
        }
        if !self.session.is_logged_in() {
            return Err(NordError::AlreadyLogged);
        }
        let result = self.runner.run(&["logout"]);
        if let Err(error) = self.refresh() {
            tracing::debug!(%error, "refresh after logout failed");
        }
        if let Err(error) = result {
            if self.session.is_logged_in() {
                return Err(error);
            }
        }
        Ok(())
    }

    /// Connect to the given server, or quick-connect when `None`
    pub fn connect(&mut self, server: Option<&str>) -> Result<()> {
        if !self.session.active {
            return Err(NordError::NoSession);
        }
        match server {
            Some(name) => self.runner.run(&["c", name])?,
            None => self.runner.run(&["c"])?,
        };
        self.update_status()
    }

    /// Quick-connect to whatever server the binary picks
    pub fn quick_connect(&mut self) -> Result<()> {
        self.connect(None)
    }

    /// Connect to the last used server group, if one is known
    pub fn reconnect(&mut self) -> Result<()> {
        let last_server = self.host.last_server.clone();
        if last_server.is_empty() {
            self.connect(None)
        } else {
            self.connect(Some(&last_server))
        }
    }

    /// Disconnect from the current server
    ///
    /// The host record is refreshed afterwards; `last_server` survives
    /// so a later reconnect can target the same server.
    pub fn disconnect(&mut self) -> Result<()> {
        if !self.session.active {
            return Err(NordError::NoSession);
        }
        self.runner.run(&["d"])?;
        self.update_status()
    }

    /// Rebuild the host record from `status` output
    ///
    /// Online iff the connection line is followed by detail lines and
    /// ends with `Connected`. While offline the network identity is
    /// cleared but `last_server` and `country` keep their last values.
    fn update_status(&mut self) -> Result<()> {
        let output = self.runner.run(&["status"])?;
        let lines = parser::split_lines(&output, STATUS_LINE_COUNT);
        self.host.online = lines.len() > 1 && lines[0].ends_with(CONNECTED_SUFFIX);
        if self.host.online {
            let hostname = parser::split_value(lines.get(1).copied().unwrap_or(""), DELIM);
            self.host.last_server = parser::split_key(hostname, ".").to_string();
            self.host.hostname = hostname.to_string();
            self.host.ip = parser::split_value(lines.get(2).copied().unwrap_or(""), DELIM).to_string();
            let country = parser::split_value(lines.get(3).copied().unwrap_or(""), DELIM);
            if let Some(country) = Country::from_name(country) {
                self.host.country = Some(country);
            }
            self.host.proto =
                parser::split_value(lines.get(STATUS_LINE_COUNT - 1).copied().unwrap_or(""), DELIM)
                    .to_string();
        } else {
            self.host.hostname.clear();
            self.host.ip.clear();
            self.host.proto.clear();
        }
        Ok(())
    }

    /// Rebuild the session's account fields from `account` output
    ///
    /// Anything but the expected three lines is taken as "not logged
    /// in" and clears the fields, even when the call itself succeeded.
    fn update_account(&mut self) -> Result<()> {
        if !self.session.active {
            return Err(NordError::NoSession);
        }
        let output = self.runner.run(&["account"])?;
        let lines = parser::split_lines(&output, ACCOUNT_LINE_COUNT);
        if lines.len() == ACCOUNT_LINE_COUNT {
            self.session.user = parser::split_value(lines[1], DELIM).to_string();
            self.session.expiry = parser::split_value(lines[2], DELIM).to_string();
        } else {
            self.session.user.clear();
            self.session.expiry.clear();
        }
        Ok(())
    }
}
