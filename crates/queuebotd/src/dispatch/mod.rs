//! Inbound event decoding and dispatch.
//!
//! Each text frame received from the platform is decoded into an
//! [`InboundEvent`] and handed to the [`EventDispatcher`], which owns the
//! [`MembershipQueue`](crate::MembershipQueue). The dispatcher answers with a
//! [`DispatchOutcome`]: a reply to send, an acknowledgment to record against a
//! previously sent message, or nothing.
//!
//! ## Frames
//!
//! ```json
//! {"type":"message","channel":"C77DZM4F9","user":"U1","text":"nq"}
//! {"ok":true,"reply_to":3,"ts":"1520000000.000100","text":"QUEUE = [ <@U1> ]"}
//! ```
//!
//! Frames carrying `reply_to` without a `type` acknowledge delivery of the
//! outbound message with that sequence id and never count as chat messages.

mod errors;
mod event;
mod handler;
mod replies;

pub use self::errors::FrameError;
pub use self::event::{EventKind, InboundEvent};
pub use self::handler::{DispatchOutcome, EventDispatcher};
pub use self::replies::{
    CONNECTED, FAREWELL, HELP, STATUS, already_queued, not_your_turn, specify_target,
    with_queue,
};

/// Tracing target for dispatch operations.
pub(crate) const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");
