//! Typed view of inbound platform events.

use serde::Deserialize;
use serde_json::Value;

use super::errors::FrameError;

/// Event decoded from one inbound frame.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundEvent {
    /// Event type such as `hello`, `goodbye` or `message`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Sequence id of the outbound message this frame acknowledges.
    #[serde(default)]
    pub reply_to: Option<u64>,
    /// Platform id of the message author.
    #[serde(default)]
    pub user: Option<String>,
    /// Message body.
    #[serde(default)]
    pub text: Option<String>,
    /// Channel the message was posted in.
    #[serde(default)]
    pub channel: Option<String>,
    /// Message subtype; join and leave notices carry one.
    #[serde(default)]
    pub subtype: Option<String>,
    /// The complete decoded frame, kept as the acknowledgment payload.
    #[serde(skip)]
    pub payload: Value,
}

/// Coarse classification of an [`InboundEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind<'a> {
    /// The platform accepted the connection.
    Hello,
    /// The platform is about to close the connection.
    Goodbye,
    /// A channel message.
    Message,
    /// Delivery acknowledgment for the given sequence id.
    Acknowledgement(u64),
    /// Any other typed event.
    Other(&'a str),
    /// A frame with neither a type nor a correlation id, or a typed frame
    /// that also carries one.
    Unclassified,
}

impl InboundEvent {
    /// Decodes a text frame.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError`] when the text is not a JSON object matching the
    /// event schema.
    pub fn decode(frame: &str) -> Result<Self, FrameError> {
        let payload: Value = serde_json::from_str(frame).map_err(FrameError::from_json_error)?;
        if !payload.is_object() {
            return Err(FrameError::NotAnObject);
        }
        let mut event: Self =
            serde_json::from_value(payload.clone()).map_err(FrameError::from_json_error)?;
        event.payload = payload;
        Ok(event)
    }

    /// Classifies the event for dispatch.
    #[must_use]
    pub fn classify(&self) -> EventKind<'_> {
        match (self.kind.as_deref(), self.reply_to) {
            (None, Some(id)) => EventKind::Acknowledgement(id),
            (None, None) | (Some(_), Some(_)) => EventKind::Unclassified,
            (Some("hello"), None) => EventKind::Hello,
            (Some("goodbye"), None) => EventKind::Goodbye,
            (Some("message"), None) => EventKind::Message,
            (Some(other), None) => EventKind::Other(other),
        }
    }
}
