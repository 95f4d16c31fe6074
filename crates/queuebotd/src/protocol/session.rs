//! One connection's receive loop and ordered writer.

use std::fmt;

use futures_util::{Sink, SinkExt, Stream, StreamExt};
use serde_json::Value;
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::{self, Message};
use tracing::{debug, info, warn};

use super::PROTOCOL_TARGET;
use super::frame::OutboundMessage;
use super::pending::{PendingSends, SequenceCounter};
use crate::dispatch::{DispatchOutcome, EventDispatcher, InboundEvent};

/// Why a session stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The platform sent a close frame.
    Closed,
    /// The inbound stream finished without a close frame.
    StreamEnded,
    /// Reading or writing failed.
    Failed(String),
}

impl fmt::Display for SessionEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Closed => f.write_str("closed by peer"),
            Self::StreamEnded => f.write_str("stream ended"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

/// Final state of a finished session.
#[derive(Debug)]
pub struct SessionReport {
    /// Why the session stopped.
    pub end: SessionEnd,
    /// Delivery state of every message sent during the session.
    pub pending: PendingSends,
}

/// Serves one open connection.
///
/// Frames are dispatched on the reading task in arrival order. Replies are
/// numbered there and pushed onto one ordered channel that a single writer
/// drains, so the wire order matches sequence-id order.
pub struct Session<'a> {
    dispatcher: &'a mut EventDispatcher,
    sequence: SequenceCounter,
    pending: PendingSends,
}

impl<'a> Session<'a> {
    /// Starts a session with a fresh sequence counter and pending table.
    #[must_use]
    pub const fn new(dispatcher: &'a mut EventDispatcher) -> Self {
        Self {
            dispatcher,
            sequence: SequenceCounter::new(),
            pending: PendingSends::new(),
        }
    }

    /// Runs until the connection closes or fails.
    pub async fn run<K, S>(mut self, sink: K, stream: S) -> SessionReport
    where
        K: Sink<Message> + Unpin,
        K::Error: fmt::Display,
        S: Stream<Item = Result<Message, tungstenite::Error>> + Unpin,
    {
        let (outbound, queued) = mpsc::unbounded_channel();
        let end = {
            let reader = self.read(stream, outbound);
            let writer = write_outbound(sink, queued);
            tokio::pin!(reader, writer);
            tokio::select! {
                biased;
                end = &mut reader => {
                    if let Some(reason) = writer.as_mut().await {
                        debug!(target: PROTOCOL_TARGET, %reason, "writer failed while draining");
                    }
                    end
                }
                failure = &mut writer => SessionEnd::Failed(
                    failure.unwrap_or_else(|| String::from("outbound channel closed")),
                ),
            }
        };
        SessionReport {
            end,
            pending: self.pending,
        }
    }

    async fn read<S>(
        &mut self,
        mut stream: S,
        outbound: mpsc::UnboundedSender<OutboundMessage>,
    ) -> SessionEnd
    where
        S: Stream<Item = Result<Message, tungstenite::Error>> + Unpin,
    {
        while let Some(frame) = stream.next().await {
            match frame {
                Ok(Message::Text(text)) => self.handle_text(&text, &outbound),
                Ok(Message::Close(close)) => {
                    info!(target: PROTOCOL_TARGET, ?close, "peer closed the connection");
                    return SessionEnd::Closed;
                }
                Ok(_) => debug!(target: PROTOCOL_TARGET, "ignoring non-text frame"),
                Err(error) => {
                    warn!(target: PROTOCOL_TARGET, %error, "receive failed");
                    return SessionEnd::Failed(error.to_string());
                }
            }
        }
        SessionEnd::StreamEnded
    }

    fn handle_text(&mut self, text: &str, outbound: &mpsc::UnboundedSender<OutboundMessage>) {
        let event = match InboundEvent::decode(text) {
            Ok(event) => event,
            Err(error) => {
                warn!(target: PROTOCOL_TARGET, %error, "dropping malformed frame");
                return;
            }
        };
        match self.dispatcher.dispatch(event) {
            DispatchOutcome::Reply(reply) => self.send(reply, outbound),
            DispatchOutcome::Acknowledge { id, payload } => self.acknowledge(id, payload),
            DispatchOutcome::Ignore => {}
        }
    }

    fn send(&mut self, text: String, outbound: &mpsc::UnboundedSender<OutboundMessage>) {
        let id = self.sequence.next_id();
        self.pending.track(id);
        let message = OutboundMessage::new(id, self.dispatcher.channel(), text);
        if outbound.send(message).is_err() {
            warn!(target: PROTOCOL_TARGET, id, "writer stopped; reply dropped");
        }
    }

    fn acknowledge(&mut self, id: u64, payload: Value) {
        if payload.get("ok").and_then(Value::as_bool) == Some(false) {
            warn!(
                target: PROTOCOL_TARGET,
                id,
                error = ?payload.get("error"),
                "platform rejected message"
            );
        }
        if !self.pending.resolve(id, payload) {
            debug!(target: PROTOCOL_TARGET, id, "acknowledgement for unknown message");
        }
    }
}

/// Drains `queued` into `sink` in order. Returns the failure that stopped
/// it, or `None` once the channel closes.
async fn write_outbound<K>(
    mut sink: K,
    mut queued: mpsc::UnboundedReceiver<OutboundMessage>,
) -> Option<String>
where
    K: Sink<Message> + Unpin,
    K::Error: fmt::Display,
{
    while let Some(message) = queued.recv().await {
        let encoded = match message.encode() {
            Ok(encoded) => encoded,
            Err(error) => {
                warn!(target: PROTOCOL_TARGET, id = message.id, %error, "failed to encode reply");
                continue;
            }
        };
        if let Err(error) = sink.send(Message::Text(encoded)).await {
            warn!(target: PROTOCOL_TARGET, id = message.id, %error, "send failed");
            return Some(error.to_string());
        }
        debug!(target: PROTOCOL_TARGET, id = message.id, "sent reply");
    }
    if let Err(error) = sink.close().await {
        debug!(target: PROTOCOL_TARGET, %error, "closing socket failed");
    }
    None
}
