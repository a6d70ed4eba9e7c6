//! NordVPN subprocess control and session layer
//!
//! Handles nordvpn binary invocation, output parsing and the
//! session/host state machine.

pub mod connector;
pub mod parser;
pub mod pause;
pub mod process;
pub mod state;

// Public re-exports
pub use connector::NordConnector;
pub use pause::{PauseControl, PauseError};
pub use process::{CommandRunner, NordvpnRunner};
pub use state::{Host, Session};
