//! Outbound frame encoding.

use serde::Serialize;

/// Chat message sent over the socket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundMessage {
    /// Per-connection sequence id echoed back as `reply_to`.
    pub id: u64,
    #[serde(rename = "type")]
    kind: &'static str,
    /// Destination channel.
    pub channel: String,
    /// Message body.
    pub text: String,
}

impl OutboundMessage {
    /// Builds a message frame.
    #[must_use]
    pub fn new(id: u64, channel: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            kind: "message",
            channel: channel.into(),
            text: text.into(),
        }
    }

    /// Serialises the frame to JSON text.
    ///
    /// # Errors
    ///
    /// Returns the serde error if encoding fails.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
