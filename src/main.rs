//! nordi - NordVPN companion CLI
//!
//! A thin front-end over nordi-core's session layer: connection and
//! account management for the nordvpn binary, plus a pause command
//! that disconnects and reconnects automatically.

use clap::{Parser, Subcommand};
use nordi_core::error::NordError;
use nordi_core::init_logging;

mod cli;

#[derive(Parser)]
#[command(name = "nordi")]
#[command(about = "NordVPN session companion with pause/auto-reconnect")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current session and connection status
    Status,
    /// Show the logged-in account details
    Account,
    /// List connectable countries and server groups
    Servers,
    /// Connect to a server by name or selection index (omit for quick-connect)
    Connect {
        /// Country/group name or 1-based index from `nordi servers`
        server: Option<String>,
    },
    /// Disconnect from the current server
    Disconnect,
    /// Reconnect to the last used server
    Reconnect,
    /// Request a browser link to log in with
    Login,
    /// Log out of the account
    Logout,
    /// Disconnect now and reconnect after the given interval
    Pause {
        /// Minutes to stay disconnected
        #[arg(value_parser = clap::value_parser!(u64).range(0..=720))]
        minutes: u64,
    },
}

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(2);
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Status => cli::run_status(),
        Commands::Account => cli::run_account(),
        Commands::Servers => cli::run_servers(),
        Commands::Connect { server } => cli::run_connect(server.as_deref()),
        Commands::Disconnect => cli::run_disconnect(),
        Commands::Reconnect => cli::run_reconnect(),
        Commands::Login => cli::run_login(),
        Commands::Logout => cli::run_logout(),
        Commands::Pause { minutes } => cli::run_pause(minutes),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            let exit_code = match e {
                // Environment/usage problems (exit code 2)
                cli::CliError::Nord(NordError::NotFound) => 2,
                cli::CliError::BadSelector(_) => 2,
                // Runtime failures against the binary (exit code 1)
                cli::CliError::Nord(_) | cli::CliError::Pause(_) => 1,
            };

            eprintln!("{}", e);
            std::process::exit(exit_code);
        }
    }
}
