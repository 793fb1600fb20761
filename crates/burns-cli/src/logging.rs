//! Diagnostic logging to stderr.

use crate::error::{CliError, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `default_level` when it is set.
pub fn init(default_level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level)
            .map_err(|e| CliError::Logging(format!("invalid log filter '{}': {}", default_level, e)))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
