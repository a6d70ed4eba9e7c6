//! Core library for the nordi NordVPN companion
//!
//! This crate wraps the externally installed `nordvpn` binary with a
//! typed session layer: subprocess invocation, output parsing into a
//! session/host model, and a cancellable delayed-routine primitive
//! used for the pause/auto-reconnect feature.

pub mod error;
pub mod routine;
pub mod server;

pub mod vpn;

/// Initialize logging infrastructure
///
/// Sets up tracing with systemd journal logging when running under
/// systemd, otherwise logs to stderr with pretty formatting.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    #[cfg(target_os = "linux")]
    {
        if std::env::var("JOURNAL_STREAM").is_ok() {
            let journal_layer = tracing_journald::layer()?;
            tracing_subscriber::registry()
                .with(journal_layer)
                .with(tracing_subscriber::filter::LevelFilter::INFO)
                .init();
            return Ok(());
        }
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().pretty())
        .with(tracing_subscriber::filter::LevelFilter::INFO)
        .init();

    Ok(())
}
