//! Long-lived platform connection.
//!
//! [`ProtocolClient`] drives the `Connecting → Connected → Closed` cycle. A
//! [`Connector`] exchanges the bot credential for a socket endpoint and opens
//! it; each open socket is served by one [`Session`], which reads frames,
//! dispatches them in arrival order and hands replies to a single writer so
//! sequence ids reach the wire in ascending order.

mod client;
mod connector;
mod errors;
mod frame;
mod pending;
mod session;

pub use self::client::{ProtocolClient, ReconnectPolicy};
pub use self::connector::{Connection, Connector, RtmConnector, RtmSocket};
pub use self::errors::{ClientError, ConnectError};
pub use self::frame::OutboundMessage;
pub use self::pending::{PendingSends, SendStatus, SequenceCounter};
pub use self::session::{Session, SessionEnd, SessionReport};

/// Tracing target for protocol operations.
pub(crate) const PROTOCOL_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::protocol");
