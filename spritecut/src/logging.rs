//! Log output for the command line tool

use tracing_subscriber::EnvFilter;

/// Install a stderr subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level is `info`, or `debug`
/// when `debug` is set.
///
/// # Errors
///
/// Fails if the filter is invalid or a subscriber is already installed.
pub fn setup_logging(debug: bool) -> anyhow::Result<()> {
    let base_level = if debug { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(base_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(debug)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("logger initialization failed: {}", e))
}
