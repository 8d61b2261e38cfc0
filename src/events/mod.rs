//! Observability events: types and broadcast bus.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//! - [`Bus`] thin wrapper over `tokio::sync::broadcast`
//!
//! ## Quick reference
//! - **Publishers**: `SubscriptionRegistry` (subscribe/unsubscribe/fire, isolated panics),
//!   `MessageRouter` (registration, delivery, rejection).
//! - **Consumers**: whoever holds a receiver from `Switchboard::events()`.

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind};
