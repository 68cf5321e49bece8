use tracing_subscriber::{EnvFilter, prelude::*};

use crate::errors::{ContentConfigError, ContentConfigResult};

/// Initialize logging based on environment configuration
///
/// Logging stays off unless `RUST_LOG` is set, so command output on stdout is
/// never interleaved with log lines. Logs go to stderr.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls logging verbosity (trace, debug, info, warn, error)
///
/// # Returns
/// - `Ok(())` if logging is successfully initialized or skipped
/// - `Err(ContentConfigError::LoggingInitialization)` if initialization fails
pub fn init_logging() -> ContentConfigResult<()> {
    // Skip logging entirely unless RUST_LOG is set
    if std::env::var("RUST_LOG").is_err() {
        return Ok(());
    }

    let env_filter = EnvFilter::from_default_env();

    // Pretty format on stderr so stdout carries only command output
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .pretty();

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| ContentConfigError::LoggingInitialization(e.to_string()))?;

    Ok(())
}
