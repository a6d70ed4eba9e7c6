//! Command handlers for the nordi CLI
//!
//! Stands in for the graphical presentation layer: every handler opens
//! a session, performs one typed operation and renders the resulting
//! state.

use colored::Colorize;
use nordi_core::error::NordError;
use nordi_core::server::{self, COUNTRY_COUNT, GROUP_COUNT};
use nordi_core::vpn::{NordConnector, PauseControl, PauseError};
use std::sync::{Arc, Mutex};
use tracing::info;

/// Errors surfaced to the terminal
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Nord(#[from] NordError),

    #[error(transparent)]
    Pause(#[from] PauseError),

    #[error("no server matches selection index {0}")]
    BadSelector(usize),
}

fn open_session() -> Result<NordConnector, CliError> {
    let mut vpn = NordConnector::new();
    vpn.open()?;
    Ok(vpn)
}

fn print_status(vpn: &NordConnector) {
    let session = vpn.session();
    let host = vpn.host();
    println!("{}", session.version);
    if host.online {
        println!("Status: {}", "Connected".green());
        println!("Server: {}", host.hostname);
        println!("IP: {}", host.ip);
        if let Some(country) = host.country {
            println!("Country: {}", country.name());
        }
        println!("Protocol: {}", host.proto);
    } else {
        println!("Status: {}", "Disconnected".red());
        if !host.last_server.is_empty() {
            println!("Last server: {}", host.last_server);
        }
    }
}

pub fn run_status() -> Result<(), CliError> {
    let vpn = open_session()?;
    print_status(&vpn);
    Ok(())
}

pub fn run_account() -> Result<(), CliError> {
    let vpn = open_session()?;
    let session = vpn.session();
    if session.is_logged_in() {
        println!("Email: {}", session.user);
        println!("Subscription: {}", session.expiry);
    } else {
        println!("{}", "Not logged in".yellow());
    }
    Ok(())
}

pub fn run_servers() -> Result<(), CliError> {
    for index in 1..=COUNTRY_COUNT + GROUP_COUNT {
        let name = server::node_from_index(index).unwrap_or_default();
        let kind = if index <= COUNTRY_COUNT { "country" } else { "group" };
        println!("{:3}  {:<8} {}", index, kind, name);
    }
    Ok(())
}

/// Turn a CLI server argument into a connect target
///
/// A numeric argument is a 1-based selection index into the server
/// directory, with `0` meaning "no selection" (quick-connect);
/// anything else is passed to the binary as-is.
fn resolve_target(target: Option<&str>) -> Result<Option<String>, CliError> {
    match target {
        None => Ok(None),
        Some(raw) => match raw.parse::<usize>() {
            Ok(0) => Ok(None),
            Ok(index) => server::node_from_index(index)
                .map(|name| Some(name.to_string()))
                .ok_or(CliError::BadSelector(index)),
            Err(_) => Ok(Some(raw.to_string())),
        },
    }
}

pub fn run_connect(target: Option<&str>) -> Result<(), CliError> {
    let mut vpn = open_session()?;
    let server = resolve_target(target)?;
    info!(server = server.as_deref().unwrap_or("<quick-connect>"), "connecting");
    vpn.connect(server.as_deref())?;
    print_status(&vpn);
    Ok(())
}

pub fn run_disconnect() -> Result<(), CliError> {
    let mut vpn = open_session()?;
    vpn.disconnect()?;
    print_status(&vpn);
    Ok(())
}

pub fn run_reconnect() -> Result<(), CliError> {
    let mut vpn = open_session()?;
    vpn.reconnect()?;
    print_status(&vpn);
    Ok(())
}

pub fn run_login() -> Result<(), CliError> {
    let mut vpn = open_session()?;
    let link = vpn.login()?;
    println!("1. Open {} to log in.", link.underline());
    println!("2. Run `nordi account` afterwards to confirm.");
    Ok(())
}

pub fn run_logout() -> Result<(), CliError> {
    let mut vpn = open_session()?;
    vpn.logout()?;
    println!("{}", "Logged out".yellow());
    Ok(())
}

pub fn run_pause(minutes: u64) -> Result<(), CliError> {
    let vpn = Arc::new(Mutex::new(open_session()?));
    let mut pause = PauseControl::new(Arc::clone(&vpn));
    pause.pause_minutes(minutes)?;
    println!(
        "Disconnected; reconnecting in {} minute(s). Ctrl+C aborts without reconnecting.",
        minutes
    );
    pause.wait();
    print_status(&vpn.lock().unwrap());
    Ok(())
}
