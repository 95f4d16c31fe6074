//! Errors that end the process.

use std::io;

use thiserror::Error;

use super::shutdown::ShutdownError;
use crate::bootstrap::BootstrapError;
use crate::protocol::ClientError;

/// Errors that end the process with a failure status.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// Bootstrap failed.
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),
    /// The async runtime could not be built.
    #[error("failed to build async runtime: {source}")]
    Runtime {
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
    /// The client stopped on a fatal connection error.
    #[error("chat connection failed: {source}")]
    Client {
        /// Underlying client error.
        #[source]
        source: ClientError,
    },
    /// Listening for shutdown signals failed.
    #[error(transparent)]
    Shutdown(#[from] ShutdownError),
}
