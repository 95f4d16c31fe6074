//! Waits for an interrupt or terminate signal.

use std::future::Future;
use std::io;

use thiserror::Error;
use tracing::info;

use super::PROCESS_TARGET;

/// Source of the operator's request to stop.
pub trait ShutdownSignal {
    /// Resolves once the bot should stop.
    fn wait(&self) -> impl Future<Output = Result<(), ShutdownError>>;
}

/// Errors reported by shutdown listeners.
#[derive(Debug, Error)]
pub enum ShutdownError {
    /// Installing signal handlers failed.
    #[error("failed to install signal handlers: {source}")]
    Install {
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
}

/// Waits for Ctrl-C, or SIGTERM on unix.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemShutdownSignal;

impl ShutdownSignal for SystemShutdownSignal {
    async fn wait(&self) -> Result<(), ShutdownError> {
        let signal = wait_for_signal().await?;
        info!(target: PROCESS_TARGET, signal, "shutdown signal received");
        Ok(())
    }
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<&'static str, ShutdownError> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate =
        signal(SignalKind::terminate()).map_err(|source| ShutdownError::Install { source })?;
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result.map_err(|source| ShutdownError::Install { source })?;
            Ok("SIGINT")
        }
        _ = terminate.recv() => Ok("SIGTERM"),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> Result<&'static str, ShutdownError> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|source| ShutdownError::Install { source })?;
    Ok("ctrl-c")
}
