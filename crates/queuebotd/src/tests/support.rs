//! Shared test doubles: a recording health reporter, configuration loaders
//! and a scripted connector.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::ffi::OsString;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::channel::mpsc;
use futures::{StreamExt, stream};
use ortho_config::OrthoError;
use queuebot_config::Config;
use tokio_tungstenite::tungstenite::{self, Message};

use crate::bootstrap::{BootstrapError, ConfigLoader};
use crate::health::HealthReporter;
use crate::protocol::{Connection, ConnectError, Connector, SessionEnd};

/// Lifecycle events captured by [`RecordingHealthReporter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthEvent {
    BootstrapStarting,
    BootstrapSucceeded,
    BootstrapFailed(String),
    Connecting(u32),
    Connected(String),
    ConnectionLost(SessionEnd),
    ConnectFailed { retryable: bool },
    ReconnectScheduled { attempt: u32, delay: Duration },
}

/// Records health events for assertions.
#[derive(Debug, Default)]
pub struct RecordingHealthReporter {
    events: Mutex<Vec<HealthEvent>>,
}

impl RecordingHealthReporter {
    pub fn events(&self) -> Vec<HealthEvent> {
        self.events
            .lock()
            .expect("health reporter mutex poisoned")
            .clone()
    }

    fn record(&self, event: HealthEvent) {
        self.events
            .lock()
            .expect("health reporter mutex poisoned")
            .push(event);
    }
}

impl HealthReporter for RecordingHealthReporter {
    fn bootstrap_starting(&self) {
        self.record(HealthEvent::BootstrapStarting);
    }

    fn bootstrap_succeeded(&self, _config: &Config) {
        self.record(HealthEvent::BootstrapSucceeded);
    }

    fn bootstrap_failed(&self, error: &BootstrapError) {
        self.record(HealthEvent::BootstrapFailed(error.to_string()));
    }

    fn connecting(&self, attempt: u32) {
        self.record(HealthEvent::Connecting(attempt));
    }

    fn connected(&self, endpoint: &str) {
        self.record(HealthEvent::Connected(endpoint.to_owned()));
    }

    fn connection_lost(&self, end: &SessionEnd) {
        self.record(HealthEvent::ConnectionLost(end.clone()));
    }

    fn connect_failed(&self, error: &ConnectError) {
        self.record(HealthEvent::ConnectFailed {
            retryable: error.is_retryable(),
        });
    }

    fn reconnect_scheduled(&self, attempt: u32, delay: Duration) {
        self.record(HealthEvent::ReconnectScheduled { attempt, delay });
    }
}

/// Configuration with a credential and tiny reconnect delays.
pub fn test_config() -> Config {
    Config {
        bot_token: Some(String::from("xoxb-test")),
        channel: String::from("C1"),
        reconnect_initial_backoff_ms: 1,
        reconnect_max_backoff_ms: 4,
        ..Config::default()
    }
}

/// Loader failing on an unparsable command-line value.
pub struct FailingConfigLoader;

impl ConfigLoader for FailingConfigLoader {
    fn load(&self) -> Result<Config, Arc<OrthoError>> {
        Config::load_from_iter([
            OsString::from("queuebotd"),
            OsString::from("--reconnect-initial-backoff-ms"),
            OsString::from("soon"),
        ])
    }
}

pub type InboundFrames = stream::Iter<std::vec::IntoIter<Result<Message, tungstenite::Error>>>;
pub type ScriptedConnection = Connection<mpsc::UnboundedSender<Message>, InboundFrames>;

/// Builds a connection that yields `frames` and then ends, returning the
/// receiver that observes everything the session writes.
pub fn scripted_connection(
    frames: Vec<Result<Message, tungstenite::Error>>,
) -> (ScriptedConnection, mpsc::UnboundedReceiver<Message>) {
    let (sink, written) = mpsc::unbounded();
    let connection = Connection {
        endpoint: String::from("wss://chat.test/socket"),
        bot_user_id: Some(String::from("UBOT")),
        sink,
        stream: stream::iter(frames),
    };
    (connection, written)
}

/// Text frame helper.
pub fn text(frame: &str) -> Result<Message, tungstenite::Error> {
    Ok(Message::Text(frame.to_owned()))
}

/// A retryable connection failure.
pub fn socket_failure() -> ConnectError {
    ConnectError::WebSocket {
        source: Box::new(tungstenite::Error::ConnectionClosed),
    }
}

/// A handshake refusal.
pub fn rejection() -> ConnectError {
    ConnectError::Rejected {
        reason: String::from("invalid_auth"),
    }
}

/// Connector replaying a fixed script of outcomes, then refusing.
#[derive(Default)]
pub struct ScriptedConnector {
    script: RefCell<VecDeque<Result<ScriptedConnection, ConnectError>>>,
}

impl ScriptedConnector {
    pub fn new(script: impl IntoIterator<Item = Result<ScriptedConnection, ConnectError>>) -> Self {
        Self {
            script: RefCell::new(script.into_iter().collect()),
        }
    }
}

impl Connector for ScriptedConnector {
    type SinkError = mpsc::SendError;
    type Sink = mpsc::UnboundedSender<Message>;
    type Stream = InboundFrames;

    async fn connect(&self) -> Result<ScriptedConnection, ConnectError> {
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(rejection()))
    }
}

/// Collects the text of every frame written to a finished session's sink.
pub async fn written_texts(written: mpsc::UnboundedReceiver<Message>) -> Vec<String> {
    written
        .filter_map(|message| async move {
            match message {
                Message::Text(text) => Some(text),
                _ => None,
            }
        })
        .collect()
        .await
}

/// Decodes written frames into JSON values.
pub async fn written_frames(written: mpsc::UnboundedReceiver<Message>) -> Vec<serde_json::Value> {
    written_texts(written)
        .await
        .iter()
        .map(|text| serde_json::from_str(text).expect("outbound frame is JSON"))
        .collect()
}
