//! # switchboard
//!
//! **Switchboard** is a small in-memory toolkit for two classic decoupling
//! patterns: an observer-style subscription registry and a mediator-style
//! message router. Both are plain instances owned by the caller; nothing is
//! global.
//!
//! ## Architecture
//! ```text
//!                  ┌────────────────────────────────────────────┐
//!                  │  Switchboard (caller-owned context)        │
//!                  │  - SubscriptionRegistry                    │
//!                  │  - MessageRouter                           │
//!                  │  - ItemStore, MemberFactory                │
//!                  └──────┬──────────────┬──────────────┬───────┘
//!                         │              │              │
//!                 notices │     messages │        lines │
//!                         ▼              ▼              ▼
//!                  ┌────────────────────────────────────────────┐
//!                  │  LogSink (TracingSink / MemorySink / ...)  │
//!                  └────────────────────────────────────────────┘
//!
//!   registry + router ── publish(Event) ──► Bus ──► Switchboard::events()
//! ```
//!
//! ## Features
//! | Area              | Description                                                 | Key types / traits                          |
//! |-------------------|-------------------------------------------------------------|---------------------------------------------|
//! | **Observer**      | Ordered subscribers, duplicate-preserving, isolated `fire`. | [`SubscriptionRegistry`], [`Subscribe`]     |
//! | **Mediator**      | Targeted and broadcast delivery between named participants. | [`MessageRouter`], [`Participant`], [`Inbox`] |
//! | **Factory**       | Members built from tier names.                              | [`MemberFactory`], [`MembershipTier`]       |
//! | **Items**         | Private list with `add` / `get`.                            | [`ItemStore`]                               |
//! | **Sinks**         | Line output capability.                                     | [`LogSink`], [`TracingSink`], [`MemorySink`] |
//! | **Events**        | Broadcast observability events.                             | [`Event`], [`EventKind`]                    |
//! | **Errors**        | Typed routing and factory errors.                           | [`RouterError`], [`MembershipError`]        |
//! | **Configuration** | Bus capacity, strict routing.                               | [`Config`]                                  |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in `StdoutSink` _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use switchboard::{Config, MemorySink, SubscriberFn, Switchboard};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let sink = Arc::new(MemorySink::new());
//!     let sb = Switchboard::builder(Config::default())
//!         .with_sink(sink.clone())
//!         .build();
//!
//!     let ms = SubscriberFn::arc("getCurMilliseconds", || async {});
//!     let s = SubscriberFn::arc("getCurSeconds", || async {});
//!
//!     sb.registry().subscribe(ms.clone()).await;
//!     sb.registry().subscribe(s.clone()).await;
//!     sb.registry().fire().await;
//!
//!     let ms: switchboard::SubscriberRef = ms;
//!     sb.registry().unsubscribe(&ms).await;
//!     assert_eq!(sb.registry().len().await, 1);
//! }
//! ```
mod core;
mod error;
mod events;
mod items;
mod mediator;
mod membership;
mod observer;
mod sinks;

// ---- Public re-exports ----

pub use crate::core::{Config, Switchboard, SwitchboardBuilder};
pub use error::{MembershipError, RouterError};
pub use events::{Bus, Event, EventKind};
pub use items::{Item, ItemStore};
pub use mediator::{Envelope, Inbox, InboxRef, LogInbox, MessageRouter, Participant, ParticipantRef};
pub use membership::{Member, MemberFactory, MembershipTier};
pub use observer::{Subscribe, SubscriberFn, SubscriberRef, SubscriptionRegistry};
pub use sinks::{LogSink, MemorySink, SinkRef, TracingSink};

// Optional: expose a simple stdout sink (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use sinks::StdoutSink;
