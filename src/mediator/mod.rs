//! # Mediator: name-keyed participant router.
//!
//! Participants never talk to each other directly; they hand messages to the
//! [`MessageRouter`] they are registered with, which delivers them to one
//! recipient (targeted) or to everyone but the sender (broadcast).
//!
//! ## Architecture
//! ```text
//!  brad.send("hi", Some(&jeff)) ──► MessageRouter ──► jeff.inbox.receive(brad → jeff)
//!
//!  jeff.send("hi", None) ──► MessageRouter ──┬──► brad.inbox.receive(jeff → brad)
//!                           (insertion order) └──► sara.inbox.receive(jeff → sara)
//! ```
//!
//! ## Rules
//! - One entry per name; re-registering a name replaces the handle in place.
//! - Participants hold a weak back-reference to their router (no `Arc` cycle).
//! - No lock is held while inboxes run.

mod inbox;
mod participant;
mod router;

pub use inbox::{Envelope, Inbox, InboxRef, LogInbox};
pub use participant::{Participant, ParticipantRef};
pub use router::MessageRouter;
