//! Error types for inbound frame decoding.

use thiserror::Error;

/// Errors surfaced while decoding an inbound frame.
///
/// A frame that fails to decode is dropped; the receive loop carries on.
#[derive(Debug, Error)]
pub enum FrameError {
    /// Frame text is not valid JSON or does not match the event schema.
    #[error("malformed frame: {message}")]
    Malformed {
        /// Human-readable parse failure.
        message: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// Frame is valid JSON but not an object.
    #[error("frame is not a JSON object")]
    NotAnObject,
}

impl FrameError {
    /// Creates a malformed frame error from a serde error.
    #[must_use]
    pub fn from_json_error(source: serde_json::Error) -> Self {
        Self::Malformed {
            message: source.to_string(),
            source,
        }
    }
}
