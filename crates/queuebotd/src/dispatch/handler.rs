//! Maps inbound events onto queue mutations and reply texts.

use queuebot_command::{Intent, classify, mention_for};
use serde_json::Value;
use tracing::debug;

use super::DISPATCH_TARGET;
use super::event::{EventKind, InboundEvent};
use super::replies;
use crate::queue::{MembershipQueue, PlaceholderPicker, RandomPlaceholder};

/// Result of dispatching one inbound event.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// Send this text to the channel.
    Reply(String),
    /// Record delivery of the outbound message with sequence id `id`.
    Acknowledge {
        /// Sequence id being acknowledged.
        id: u64,
        /// Full acknowledgment frame.
        payload: Value,
    },
    /// Nothing to do.
    Ignore,
}

/// Owns the membership queue and applies chat commands to it.
///
/// The dispatcher outlives individual connections so the queue survives
/// reconnects. It is the only writer of the queue.
pub struct EventDispatcher {
    channel: String,
    queue: MembershipQueue,
    picker: Box<dyn PlaceholderPicker + Send + Sync>,
    self_user: Option<String>,
}

impl EventDispatcher {
    /// Creates a dispatcher serving `channel` with an empty queue.
    #[must_use]
    pub fn new(channel: impl Into<String>) -> Self {
        Self::with_picker(channel, RandomPlaceholder)
    }

    /// Creates a dispatcher that renders empty queues with `picker`.
    #[must_use]
    pub fn with_picker(
        channel: impl Into<String>,
        picker: impl PlaceholderPicker + Send + Sync + 'static,
    ) -> Self {
        Self {
            channel: channel.into(),
            queue: MembershipQueue::new(),
            picker: Box::new(picker),
            self_user: None,
        }
    }

    /// Channel this dispatcher serves and replies to.
    #[must_use]
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Current queue state.
    #[must_use]
    pub const fn queue(&self) -> &MembershipQueue {
        &self.queue
    }

    /// Records the bot's own user id so its echoed messages are skipped.
    pub fn set_self_user(&mut self, user: Option<String>) {
        self.self_user = user;
    }

    /// Dispatches one decoded event.
    pub fn dispatch(&mut self, event: InboundEvent) -> DispatchOutcome {
        match event.classify() {
            EventKind::Hello => DispatchOutcome::Reply(replies::CONNECTED.to_owned()),
            EventKind::Goodbye => DispatchOutcome::Reply(replies::FAREWELL.to_owned()),
            EventKind::Acknowledgement(id) => DispatchOutcome::Acknowledge {
                id,
                payload: event.payload,
            },
            EventKind::Message => self.handle_message(&event),
            EventKind::Other(kind) => {
                debug!(target: DISPATCH_TARGET, kind, "ignoring event");
                DispatchOutcome::Ignore
            }
            EventKind::Unclassified => DispatchOutcome::Ignore,
        }
    }

    fn handle_message(&mut self, event: &InboundEvent) -> DispatchOutcome {
        if let Some(subtype) = event.subtype.as_deref() {
            debug!(target: DISPATCH_TARGET, subtype, "ignoring message subtype");
            return DispatchOutcome::Ignore;
        }
        if event.channel.as_deref() != Some(self.channel.as_str()) {
            debug!(
                target: DISPATCH_TARGET,
                channel = event.channel.as_deref(),
                "ignoring message from another channel"
            );
            return DispatchOutcome::Ignore;
        }
        let Some(user) = event.user.as_deref() else {
            return DispatchOutcome::Ignore;
        };
        if self.self_user.as_deref() == Some(user) {
            return DispatchOutcome::Ignore;
        }
        let text = event.text.as_deref().unwrap_or_default();
        self.respond(&mention_for(user), text)
            .map_or(DispatchOutcome::Ignore, DispatchOutcome::Reply)
    }

    /// Applies a message from `sender` to the queue and returns the reply.
    ///
    /// `sender` is the sender's mention token. Unrecognised text yields
    /// `None` and leaves the queue untouched; every other command yields the
    /// current queue rendering, preceded by a warning or notice when there is
    /// one.
    pub fn respond(&mut self, sender: &str, text: &str) -> Option<String> {
        let intent = classify(text);
        debug!(target: DISPATCH_TARGET, sender, ?intent, "classified message");
        let prefix = match intent {
            Intent::QueueOverride { tokens } => {
                self.queue.override_with(tokens);
                None
            }
            Intent::QueueClear => {
                self.queue.override_with(Vec::<String>::new());
                None
            }
            Intent::Dequeue { target } => self.dequeue(sender, target.as_deref()),
            Intent::Enqueue => self.enqueue(sender),
            Intent::HelpRequest => Some(replies::HELP.to_owned()),
            Intent::StatusRequest => Some(replies::STATUS.to_owned()),
            Intent::Unrecognized => return None,
        };
        let rendering = self.queue.render_with(&*self.picker);
        Some(replies::with_queue(prefix.as_deref(), &rendering))
    }

    fn dequeue(&mut self, sender: &str, target: Option<&str>) -> Option<String> {
        let Some(target) = target else {
            return Some(replies::specify_target(sender));
        };
        if self.queue.peek() == Some(target) {
            let popped = self.queue.pop();
            debug!(target: DISPATCH_TARGET, ?popped, "popped head");
            None
        } else if target == sender && self.queue.has(sender) {
            self.queue.remove(sender);
            None
        } else {
            Some(replies::not_your_turn(sender))
        }
    }

    fn enqueue(&mut self, sender: &str) -> Option<String> {
        if self.queue.has(sender) {
            return Some(replies::already_queued(sender));
        }
        self.queue.push(sender);
        None
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("channel", &self.channel)
            .field("queue", &self.queue)
            .field("self_user", &self.self_user)
            .finish_non_exhaustive()
    }
}
