// src/logging.rs
use tracing_subscriber::{EnvFilter, fmt, util::TryInitError};

/// Installs the stderr log subscriber.
///
/// Library crates log through the `log` facade; the subscriber's log bridge
/// picks those records up. `RUST_LOG` takes precedence over `verbosity`.
///
/// # Errors
/// Fails when a global subscriber or logger is already installed.
pub fn init(verbosity: u8) -> Result<(), TryInitError> {
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).finish().try_init()
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
