//! nordvpn subprocess invocation
//!
//! Spawns the installed binary with piped output, captures stdout and
//! stderr as one text blob and waits for exit. The `CommandRunner`
//! trait is the single substitution point for tests: a scripted double
//! replaces only the spawn-and-capture step.

use crate::error::{NordError, Result};
use std::io::{ErrorKind, Read};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// Install location of the wrapped binary
pub const NORDVPN_BIN: &str = "/usr/bin/nordvpn";

/// Captured output is truncated beyond this size
pub const MAX_OUTPUT: usize = 1024;

/// The binary reports domain errors with this prefix on a clean exit
const ERROR_PREFIX: &str = "ERROR:";

/// Boundary for running nordvpn commands and capturing their output
pub trait CommandRunner {
    /// Run the binary with `args`, returning the combined output text
    fn run(&self, args: &[&str]) -> Result<String>;
}

/// Runs the real nordvpn binary
pub struct NordvpnRunner {
    binary: PathBuf,
}

impl NordvpnRunner {
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from(NORDVPN_BIN),
        }
    }
}

impl Default for NordvpnRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for NordvpnRunner {
    fn run(&self, args: &[&str]) -> Result<String> {
        tracing::debug!(?args, "running nordvpn");
        let mut child = Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|error| match error.kind() {
                ErrorKind::NotFound => NordError::NotFound,
                _ => NordError::FailedFork,
            })?;

        let mut stdout = child.stdout.take().ok_or(NordError::FailedPipe)?;
        let mut stderr = child.stderr.take().ok_or(NordError::FailedPipe)?;
        let mut raw = Vec::new();
        stdout
            .read_to_end(&mut raw)
            .map_err(|_| NordError::FailedRead)?;
        stderr
            .read_to_end(&mut raw)
            .map_err(|_| NordError::FailedRead)?;

        let status = child.wait().map_err(|_| NordError::FailedRead)?;
        if status.code().is_none() {
            // ended by a signal
            return Err(NordError::FailedExecute);
        }

        raw.truncate(MAX_OUTPUT);
        let output = String::from_utf8_lossy(&raw).into_owned();
        if output.starts_with(ERROR_PREFIX) {
            tracing::warn!(%output, "nordvpn reported an error");
            return Err(NordError::FailedExecute);
        }
        Ok(output)
    }
}
