//! # Observability events emitted by the registry and the router.
//!
//! The [`EventKind`] enum classifies event types across two categories:
//! - **Subscription events**: observer registry mutations and fan-out passes
//! - **Routing events**: participant registration and message delivery
//!
//! The [`Event`] struct carries additional metadata such as timestamps,
//! subscriber/participant names, reasons and delivery counts.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases monotonically.
//! Use `seq` to restore the exact order when events are consumed out of order.
//!
//! ## Example
//! ```rust
//! use switchboard::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::MessageDelivered)
//!     .with_source("brad")
//!     .with_target("jeff")
//!     .with_count(1);
//!
//! assert_eq!(ev.kind, EventKind::MessageDelivered);
//! assert_eq!(ev.source.as_deref(), Some("brad"));
//! assert_eq!(ev.target.as_deref(), Some("jeff"));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::SystemTime;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of observability events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    // === Subscription events ===
    /// A subscriber was appended to the registry.
    ///
    /// Sets:
    /// - `source`: subscriber name
    /// - `count`: registry length after the append
    Subscribed,

    /// An unsubscribe request was processed (even if nothing matched).
    ///
    /// Sets:
    /// - `source`: subscriber name
    /// - `count`: number of removed entries
    Unsubscribed,

    /// A fan-out pass finished.
    ///
    /// Sets:
    /// - `count`: number of subscribers notified (including panicked ones)
    Fired,

    /// A subscriber panicked while being notified; the pass continued.
    ///
    /// Sets:
    /// - `source`: subscriber name
    /// - `reason`: panic payload
    SubscriberPanicked,

    // === Routing events ===
    /// A participant was registered under a fresh name.
    ///
    /// Sets:
    /// - `source`: participant name
    ParticipantRegistered,

    /// A participant replaced a previous handle under the same name.
    ///
    /// Sets:
    /// - `source`: participant name
    ParticipantReplaced,

    /// A message was handed to one or more inboxes.
    ///
    /// Sets:
    /// - `source`: sender name
    /// - `target`: recipient name (absent for broadcast)
    /// - `count`: number of deliveries
    MessageDelivered,

    /// A send was refused by the router.
    ///
    /// Sets:
    /// - `source`: sender name
    /// - `target`: recipient name, if any
    /// - `reason`: stable error label
    MessageRejected,
}

/// Observability event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone, Debug)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,

    /// Subscriber or sending participant name.
    pub source: Option<Arc<str>>,
    /// Receiving participant name.
    pub target: Option<Arc<str>>,
    /// Human-readable reason (panic payloads, error labels).
    pub reason: Option<Arc<str>>,
    /// Kind-specific counter (deliveries, removals, registry length).
    pub count: Option<usize>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            source: None,
            target: None,
            reason: None,
            count: None,
        }
    }

    /// Attaches a subscriber or sender name.
    #[inline]
    pub fn with_source(mut self, source: impl Into<Arc<str>>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attaches a recipient name.
    #[inline]
    pub fn with_target(mut self, target: impl Into<Arc<str>>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Attaches a counter.
    #[inline]
    pub fn with_count(mut self, n: usize) -> Self {
        self.count = Some(n);
        self
    }

    /// Creates a subscriber panic event.
    #[inline]
    pub fn subscriber_panicked(subscriber: &str, info: String) -> Self {
        Event::new(EventKind::SubscriberPanicked)
            .with_source(subscriber)
            .with_reason(info)
    }

    /// True for [`EventKind::SubscriberPanicked`].
    #[inline]
    pub fn is_subscriber_panic(&self) -> bool {
        matches!(self.kind, EventKind::SubscriberPanicked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_is_monotonic() {
        let a = Event::new(EventKind::Fired);
        let b = Event::new(EventKind::Fired);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn test_subscriber_panicked_fields() {
        let ev = Event::subscriber_panicked("ticker", "boom".to_string());
        assert!(ev.is_subscriber_panic());
        assert_eq!(ev.source.as_deref(), Some("ticker"));
        assert_eq!(ev.reason.as_deref(), Some("boom"));
        assert!(ev.target.is_none());
        assert!(ev.count.is_none());
    }
}
