//! Ordered waiting line of chat participants.
//!
//! The queue stores opaque participant tokens in arrival order. Removal by
//! value scans from the head, so every operation is at worst linear in the
//! queue length. Nothing here fails: absence is reported through `Option`
//! and `bool`.

mod placeholder;

use std::collections::VecDeque;
use std::fmt;

pub use placeholder::{PLACEHOLDER_EMOJI, PlaceholderPicker, RandomPlaceholder};

/// FIFO queue of participant tokens with value-addressed removal.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MembershipQueue {
    members: VecDeque<String>,
}

impl MembershipQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `token` to the tail.
    pub fn push(&mut self, token: impl Into<String>) {
        self.members.push_back(token.into());
    }

    /// Removes and returns the first occurrence of `token`, scanning from
    /// the head.
    pub fn remove(&mut self, token: &str) -> Option<String> {
        let index = self.members.iter().position(|member| member == token)?;
        self.members.remove(index)
    }

    /// Removes and returns the head.
    pub fn pop(&mut self) -> Option<String> {
        self.members.pop_front()
    }

    /// Returns the head without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.members.front().map(String::as_str)
    }

    /// Whether `token` is anywhere in the queue.
    #[must_use]
    pub fn has(&self, token: &str) -> bool {
        self.members.iter().any(|member| member == token)
    }

    /// Whether the queue holds no participants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of queued participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Iterates from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    /// Discards the current contents and replaces them with `tokens`, in
    /// order. An empty list clears the queue.
    pub fn override_with<I, T>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.members = tokens.into_iter().map(Into::into).collect();
    }

    /// Renders the queue as `QUEUE = [ a b c ]`.
    ///
    /// An empty queue renders a placeholder emoji chosen by `picker`, as in
    /// `QUEUE = [ :whale: ]`. The choice never affects queue state.
    #[must_use]
    pub fn render_with(&self, picker: &dyn PlaceholderPicker) -> String {
        let mut rendered = String::from("QUEUE = [ ");
        if self.members.is_empty() {
            rendered.push(':');
            rendered.push_str(picker.pick(PLACEHOLDER_EMOJI));
            rendered.push_str(": ");
        } else {
            for member in &self.members {
                rendered.push_str(member);
                rendered.push(' ');
            }
        }
        rendered.push(']');
        rendered
    }
}

impl fmt::Display for MembershipQueue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.render_with(&RandomPlaceholder))
    }
}
