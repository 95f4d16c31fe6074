//! Per-connection sequence ids and delivery tracking.

use std::collections::BTreeMap;

use serde_json::Value;

/// Hands out strictly increasing sequence ids starting at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceCounter {
    next: u64,
}

impl SequenceCounter {
    /// Creates a counter whose first id is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Returns the next id.
    pub const fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }
}

impl Default for SequenceCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Delivery state of one outbound message.
#[derive(Debug, Clone, PartialEq)]
pub enum SendStatus {
    /// Sent or queued for sending; no acknowledgment yet.
    Awaiting,
    /// Acknowledged by the platform with this frame.
    Resolved(Value),
}

/// Sequence id to delivery state for one connection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingSends {
    entries: BTreeMap<u64, SendStatus>,
}

impl PendingSends {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Records `id` as awaiting acknowledgment.
    pub fn track(&mut self, id: u64) {
        self.entries.insert(id, SendStatus::Awaiting);
    }

    /// Resolves `id` with the acknowledgment frame.
    ///
    /// Returns `false` when `id` was never tracked; the payload is stored
    /// regardless.
    pub fn resolve(&mut self, id: u64, payload: Value) -> bool {
        self.entries
            .insert(id, SendStatus::Resolved(payload))
            .is_some()
    }

    /// Delivery state of `id`.
    #[must_use]
    pub fn status(&self, id: u64) -> Option<&SendStatus> {
        self.entries.get(&id)
    }

    /// Number of sends still awaiting acknowledgment.
    #[must_use]
    pub fn awaiting(&self) -> usize {
        self.entries
            .values()
            .filter(|status| matches!(status, SendStatus::Awaiting))
            .count()
    }

    /// Number of tracked ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn sequence_starts_at_one_and_increases() {
        let mut counter = SequenceCounter::new();
        let ids: Vec<u64> = (0..4).map(|_| counter.next_id()).collect();
        assert_eq!(ids, [1, 2, 3, 4]);
    }

    #[test]
    fn resolving_tracked_send() {
        let mut pending = PendingSends::new();
        pending.track(1);
        pending.track(2);
        assert_eq!(pending.awaiting(), 2);

        assert!(pending.resolve(1, json!({"ok": true, "reply_to": 1})));
        assert_eq!(pending.awaiting(), 1);
        assert_eq!(
            pending.status(1),
            Some(&SendStatus::Resolved(json!({"ok": true, "reply_to": 1})))
        );
        assert_eq!(pending.status(2), Some(&SendStatus::Awaiting));
    }

    #[test]
    fn resolving_unknown_id_is_recorded() {
        let mut pending = PendingSends::new();
        assert!(!pending.resolve(9, json!({"ok": true})));
        assert_eq!(pending.len(), 1);
        assert_eq!(pending.awaiting(), 0);
    }
}
