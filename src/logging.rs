use crate::error::ConfigError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `level` applies to this crate and to
/// actix's request logger, which reaches us through the `log` bridge.
///
/// # Errors
///
/// Will return `Err` if `level` is not a valid filter or a subscriber is
/// already installed.
pub fn init_logging(level: &str) -> Result<(), ConfigError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(format!("nhl_standings={level},actix_web={level}"))
            .map_err(|e| ConfigError::LogSetup(format!("invalid log level '{level}': {e}")))?,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| ConfigError::LogSetup(e.to_string()))
}
