//! Chat-channel queue bot.
//!
//! The bot keeps one long-lived connection to the chat platform, reads every
//! event the platform pushes, and lets members of a single channel line up
//! with short commands such as `nq` and `omw <@user>`. After each command it
//! posts the queue as `QUEUE = [ <@A> <@B> ]`.
//!
//! The crate is layered bottom-up:
//!
//! - [`MembershipQueue`] is the ordered waiting line.
//! - [`EventDispatcher`] takes a decoded [`InboundEvent`], classifies message
//!   text with [`queuebot_command`] and turns the resulting intent into a
//!   queue mutation and a reply.
//! - [`ProtocolClient`] owns the connection lifecycle. Each open socket is a
//!   [`Session`] with its own sequence counter and pending-send table; when
//!   a session ends the client reconnects.
//! - [`bootstrap_with`] and [`run_bot`] wire configuration from
//!   [`queuebot_config`], structured telemetry and shutdown signals around
//!   the client.
//!
//! Health reporting hooks emit structured events at each lifecycle step so
//! operators can follow connects, drops and retries in the logs.

mod bootstrap;
pub mod dispatch;
mod health;
mod process;
pub mod protocol;
mod queue;
mod telemetry;

pub use bootstrap::{
    Bot, BootstrapError, ConfigLoader, StaticConfigLoader, SystemConfigLoader, bootstrap_with,
};
pub use dispatch::{DispatchOutcome, EventDispatcher, InboundEvent};
pub use health::{HealthReporter, StructuredHealthReporter};
pub use process::{
    LaunchError, ShutdownError, ShutdownSignal, SystemShutdownSignal, run_bot,
    run_until_shutdown, run_with,
};
pub use protocol::{ClientError, ConnectError, ProtocolClient, ReconnectPolicy, Session};
pub use queue::{MembershipQueue, PLACEHOLDER_EMOJI, PlaceholderPicker, RandomPlaceholder};
pub use telemetry::{TelemetryError, TelemetryHandle, initialise as initialise_telemetry};

#[cfg(test)]
mod tests;
