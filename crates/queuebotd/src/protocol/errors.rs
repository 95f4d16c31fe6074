//! Error types for connection establishment and the client loop.

use thiserror::Error;
use tokio_tungstenite::tungstenite;

/// Errors raised while obtaining or opening a socket endpoint.
#[derive(Debug, Error)]
pub enum ConnectError {
    /// The platform refused the credential or answered unexpectedly.
    #[error("connection rejected: {reason}")]
    Rejected {
        /// Why the handshake was refused.
        reason: String,
    },
    /// The handshake endpoint answered but could not serve the request now.
    #[error("handshake endpoint unavailable: {reason}")]
    Unavailable {
        /// Status or decoding failure reported by the endpoint.
        reason: String,
    },
    /// The handshake endpoint could not be reached.
    #[error("handshake endpoint {url} unreachable: {source}")]
    Unreachable {
        /// Handshake URL.
        url: String,
        /// Underlying HTTP error.
        #[source]
        source: reqwest::Error,
    },
    /// The socket endpoint could not be opened.
    #[error("failed to open socket: {source}")]
    WebSocket {
        /// Underlying socket error.
        #[source]
        source: Box<tungstenite::Error>,
    },
}

impl ConnectError {
    /// Whether a later attempt may succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        !matches!(self, Self::Rejected { .. })
    }
}

/// Fatal outcomes of [`ProtocolClient::run`](super::ProtocolClient::run).
#[derive(Debug, Error)]
pub enum ClientError {
    /// The first connection could not be established.
    #[error("initial connection failed: {source}")]
    InitialConnect {
        /// Connection failure.
        #[source]
        source: ConnectError,
    },
    /// A reconnect was refused outright.
    #[error("reconnect rejected: {source}")]
    Rejected {
        /// Connection failure.
        #[source]
        source: ConnectError,
    },
    /// Reconnecting failed too many times in a row.
    #[error("gave up after {attempts} failed reconnect attempts: {source}")]
    ReconnectExhausted {
        /// Consecutive failed attempts.
        attempts: u32,
        /// Last connection failure.
        #[source]
        source: ConnectError,
    },
}
