//! Tracing subscriber set-up for the bot.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use queuebot_config::{Config, LogFormat};
use thiserror::Error;
use tracing::Subscriber;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Proof that the global subscriber is installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct TelemetryHandle;

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured filter expression does not parse.
    #[error("invalid log filter `{filter}`: {message}")]
    Filter {
        /// Offending expression.
        filter: String,
        /// Parser message.
        message: String,
    },
    /// Another global subscriber is already installed.
    #[error("failed to install tracing subscriber: {source}")]
    Subscriber {
        /// Underlying registration error.
        #[source]
        source: SetGlobalDefaultError,
    },
}

/// Installs the global subscriber on first use.
///
/// Later calls return a handle without touching global state, so tests and
/// restarts within one process may call this freely.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the filter is invalid or a different
/// subscriber already owns the global slot.
pub fn initialise(config: &Config) -> Result<TelemetryHandle, TelemetryError> {
    INSTALLED
        .get_or_try_init(|| install(config))
        .map(|_| TelemetryHandle)
}

fn install(config: &Config) -> Result<(), TelemetryError> {
    let filter =
        EnvFilter::try_new(config.log_filter()).map_err(|error| TelemetryError::Filter {
            filter: config.log_filter().to_owned(),
            message: error.to_string(),
        })?;

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_timer(fmt::time::UtcTime::rfc_3339());

    let subscriber: Box<dyn Subscriber + Send + Sync> = match config.log_format() {
        LogFormat::Json => Box::new(builder.json().flatten_event(true).finish()),
        LogFormat::Compact => Box::new(builder.compact().finish()),
    };

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|source| TelemetryError::Subscriber { source })
}
