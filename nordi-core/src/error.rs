//! Error types for the nordi NordVPN wrapper
//!
//! Every operation against the nordvpn binary reports one of these
//! codes; nothing in the core panics or aborts the hosting process.

use thiserror::Error;

/// Result of a nordvpn subprocess operation
///
/// Mutually exclusive failure codes for the session layer. The binary
/// reports some domain errors on a clean exit status via an `ERROR:`
/// text prefix, which the process invoker folds into `FailedExecute`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NordError {
    /// Error not listed in the taxonomy
    #[error("an unknown/unidentified error occurred")]
    Unknown,

    /// Operation requires an open session
    #[error("the session is not initialised")]
    NoSession,

    /// The nordvpn binary is not installed at the expected path
    #[error("the nordvpn binary was not found")]
    NotFound,

    /// Logging in while logged in, or logging out while logged out
    #[error("the account is already logged in or out")]
    AlreadyLogged,

    /// Failed acquiring the output pipe of the binary
    #[error("failed creating the pipe for the binary")]
    FailedPipe,

    /// Failed spawning the child process
    #[error("failed forking the nordvpn process")]
    FailedFork,

    /// The binary ended abnormally or reported an error
    #[error("failed to execute a command on nordvpn")]
    FailedExecute,

    /// Failed reading the captured output
    #[error("failed to read the result of a nordvpn command")]
    FailedRead,
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, NordError>;
