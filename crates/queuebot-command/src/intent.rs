/// Classified meaning of a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// The sender wants to join the end of the queue.
    Enqueue,
    /// Someone is heading to a participant; `target` is the first mention in
    /// the message, if any.
    Dequeue {
        /// Mention token of the participant being served.
        target: Option<String>,
    },
    /// Replace the whole queue with the listed participants, in order.
    QueueOverride {
        /// Mention tokens found inside the brackets.
        tokens: Vec<String>,
    },
    /// Empty the queue via a `.clear()` or `.empty()` call.
    QueueClear,
    /// The sender asked for the command list.
    HelpRequest,
    /// The sender asked whether the bot is alive.
    StatusRequest,
    /// The message is ordinary chatter.
    Unrecognized,
}

impl Intent {
    /// Returns the replacement queue contents for override intents.
    ///
    /// A clear call yields an empty slice; every other intent yields `None`.
    #[must_use]
    pub fn replacement(&self) -> Option<&[String]> {
        match self {
            Self::QueueOverride { tokens } => Some(tokens),
            Self::QueueClear => Some(&[]),
            _ => None,
        }
    }
}
