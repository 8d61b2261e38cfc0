//! # Event bus shared by the registry and the router.
//!
//! ```text
//!   SubscriptionRegistry ──┐
//!                          ├──► Bus ───► Switchboard::events() ───► user code
//!   MessageRouter ─────────┘
//! ```
//!
//! Publishing never blocks and never fails. With no live receiver the event is
//! discarded; a receiver that falls more than the configured capacity behind
//! gets `RecvError::Lagged(n)` and skips the `n` oldest events.

use tokio::sync::broadcast;

use crate::core::Config;

use super::event::Event;

/// Shared observability channel for one switchboard.
///
/// The registry publishes `Subscribed`, `Unsubscribed`, `Fired` and
/// `SubscriberPanicked`; the router publishes registration and delivery events.
/// Both hold a clone of the same `Bus`, built once by the switchboard builder.
#[derive(Clone, Debug)]
pub struct Bus {
    sender: broadcast::Sender<Event>,
}

impl Bus {
    /// Creates a bus holding up to `capacity` unread events (at least 1).
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Creates a bus sized by [`Config::bus_capacity`].
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.bus_capacity_clamped())
    }

    /// Hands `ev` to every live receiver; dropped when nobody listens.
    pub fn publish(&self, ev: Event) {
        if self.sender.receiver_count() == 0 {
            return;
        }
        // a receiver dropped since the check only loses this event
        let _ = self.sender.send(ev);
    }

    /// Receiver for events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    /// Number of live receivers.
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
