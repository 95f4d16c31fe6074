//! Exchanges the bot credential for an open socket.

use std::fmt;
use std::future::Future;

use futures_util::{Sink, Stream, StreamExt};
use queuebot_config::BotToken;
use reqwest::StatusCode;
use serde::Deserialize;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::{self, Message};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};
use tracing::debug;

use super::PROTOCOL_TARGET;
use super::errors::ConnectError;

/// An open socket split into halves.
pub struct Connection<K, S> {
    /// Socket endpoint without its query string, for logging.
    pub endpoint: String,
    /// The bot's own platform user id, when the handshake reports it.
    pub bot_user_id: Option<String>,
    /// Outbound half.
    pub sink: K,
    /// Inbound half.
    pub stream: S,
}

impl<K, S> fmt::Debug for Connection<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("endpoint", &self.endpoint)
            .field("bot_user_id", &self.bot_user_id)
            .finish_non_exhaustive()
    }
}

/// Establishes connections for the protocol client.
pub trait Connector {
    /// Error raised by the outbound half.
    type SinkError: fmt::Display;
    /// Outbound half of the socket.
    type Sink: Sink<Message, Error = Self::SinkError> + Unpin;
    /// Inbound half of the socket.
    type Stream: Stream<Item = Result<Message, tungstenite::Error>> + Unpin;

    /// Performs the handshake and opens the socket.
    fn connect(
        &self,
    ) -> impl Future<Output = Result<Connection<Self::Sink, Self::Stream>, ConnectError>>;
}

/// Socket type produced by [`RtmConnector`].
pub type RtmSocket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Connects through the platform's `rtm.connect` handshake.
#[derive(Debug, Clone)]
pub struct RtmConnector {
    http: reqwest::Client,
    handshake_url: String,
    token: BotToken,
}

impl RtmConnector {
    /// Creates a connector posting to `{api_base_url}/rtm.connect`.
    #[must_use]
    pub fn new(api_base_url: &str, token: BotToken) -> Self {
        Self {
            http: reqwest::Client::new(),
            handshake_url: format!("{}/rtm.connect", api_base_url.trim_end_matches('/')),
            token,
        }
    }

    /// URL the handshake is posted to.
    #[must_use]
    pub fn handshake_url(&self) -> &str {
        &self.handshake_url
    }

    async fn handshake(&self) -> Result<Handshake, ConnectError> {
        debug!(target: PROTOCOL_TARGET, url = %self.handshake_url, "requesting socket endpoint");
        let response = self
            .http
            .post(&self.handshake_url)
            .form(&[("token", self.token.expose()), ("presence_sub", "true")])
            .send()
            .await
            .map_err(|source| ConnectError::Unreachable {
                url: self.handshake_url.clone(),
                source,
            })?;
        check_status(response.status())?;
        let body = response
            .json::<HandshakeResponse>()
            .await
            .map_err(|error| ConnectError::Unavailable {
                reason: format!("unreadable handshake response: {error}"),
            })?;
        body.into_handshake()
    }
}

/// Only an authentication refusal is final; throttling and server faults pass.
fn check_status(status: StatusCode) -> Result<(), ConnectError> {
    if status.is_success() {
        return Ok(());
    }
    let reason = format!("handshake returned HTTP {status}");
    if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
        Err(ConnectError::Rejected { reason })
    } else {
        Err(ConnectError::Unavailable { reason })
    }
}

impl Connector for RtmConnector {
    type SinkError = tungstenite::Error;
    type Sink = futures_util::stream::SplitSink<RtmSocket, Message>;
    type Stream = futures_util::stream::SplitStream<RtmSocket>;

    async fn connect(&self) -> Result<Connection<Self::Sink, Self::Stream>, ConnectError> {
        let handshake = self.handshake().await?;
        let (socket, _response) =
            connect_async(handshake.url.as_str())
                .await
                .map_err(|source| ConnectError::WebSocket {
                    source: Box::new(source),
                })?;
        let (sink, stream) = socket.split();
        Ok(Connection {
            endpoint: redact_endpoint(&handshake.url).to_owned(),
            bot_user_id: handshake.bot_user_id,
            sink,
            stream,
        })
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Handshake {
    url: String,
    bot_user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HandshakeResponse {
    #[serde(default)]
    ok: bool,
    url: Option<String>,
    error: Option<String>,
    #[serde(rename = "self")]
    identity: Option<Identity>,
}

#[derive(Debug, Deserialize)]
struct Identity {
    id: String,
}

impl HandshakeResponse {
    fn into_handshake(self) -> Result<Handshake, ConnectError> {
        if !self.ok {
            return Err(ConnectError::Rejected {
                reason: self.error.unwrap_or_else(|| String::from("ok was false")),
            });
        }
        let url = self
            .url
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConnectError::Rejected {
                reason: String::from("handshake response carried no url"),
            })?;
        Ok(Handshake {
            url,
            bot_user_id: self.identity.map(|identity| identity.id),
        })
    }
}

/// Drops the query string, which carries a connection ticket.
fn redact_endpoint(url: &str) -> &str {
    url.split_once('?').map_or(url, |(endpoint, _)| endpoint)
}
