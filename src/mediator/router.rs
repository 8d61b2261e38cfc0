//! # MessageRouter — targeted and broadcast delivery between participants.
//!
//! ## Routing
//! ```text
//! send(message, from, Some(to))
//!     ├─ strict && to is not the registered handle ─► Err(UnknownParticipant)
//!     └─ to.receive(message, from)                   ─► Ok(1)
//!
//! send(message, from, None)
//!     └─ for p in participants (insertion order), p != from:
//!          p.receive(message, from)                  ─► Ok(n)
//! ```

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::core::Config;
use crate::error::RouterError;
use crate::events::{Bus, Event, EventKind};

use super::participant::ParticipantRef;

/// Insertion-ordered, name-keyed participant registry.
pub struct MessageRouter {
    participants: RwLock<Vec<ParticipantRef>>,
    bus: Bus,
    strict: bool,
}

impl MessageRouter {
    /// Creates an empty router.
    pub fn new(cfg: &Config, bus: Bus) -> Arc<Self> {
        Arc::new(Self {
            participants: RwLock::new(Vec::new()),
            bus,
            strict: cfg.strict_routing,
        })
    }

    /// Registers `participant` under its name and binds it to this router.
    ///
    /// An existing entry with the same name is replaced in place (it keeps its
    /// broadcast position) and returned. Registering the handle that is already
    /// stored under its name changes nothing, returns `None` and publishes no event.
    pub async fn register(self: &Arc<Self>, participant: &ParticipantRef) -> Option<ParticipantRef> {
        let replaced = {
            let mut participants = self.participants.write().await;
            let slot = participants
                .iter()
                .position(|p| p.name() == participant.name());
            match slot {
                Some(idx) if Arc::ptr_eq(&participants[idx], participant) => {
                    drop(participants);
                    participant.bind(self).await;
                    debug!(participant = %participant.name(), "already registered");
                    return None;
                }
                Some(idx) => Some(std::mem::replace(
                    &mut participants[idx],
                    Arc::clone(participant),
                )),
                None => {
                    participants.push(Arc::clone(participant));
                    None
                }
            }
        };
        participant.bind(self).await;

        let kind = if replaced.is_some() {
            EventKind::ParticipantReplaced
        } else {
            EventKind::ParticipantRegistered
        };
        debug!(participant = %participant.name(), ?kind, "registered");
        self.bus
            .publish(Event::new(kind).with_source(participant.name_arc()));
        replaced
    }

    /// Routes `message` from `from` to `to`, or to everyone but `from` when `to` is `None`.
    ///
    /// Returns the number of deliveries.
    ///
    /// # Errors
    /// [`RouterError::UnknownParticipant`] when strict routing is on and `to` is not
    /// the handle currently registered under its name.
    pub async fn send(
        &self,
        message: &str,
        from: &ParticipantRef,
        to: Option<&ParticipantRef>,
    ) -> Result<usize, RouterError> {
        let recipients: Vec<ParticipantRef> = match to {
            Some(to) => {
                if self.strict && !self.holds(to).await {
                    let err = RouterError::UnknownParticipant {
                        participant: to.name().to_string(),
                    };
                    warn!(from = %from.name(), to = %to.name(), "{}", err.as_message());
                    self.bus.publish(
                        Event::new(EventKind::MessageRejected)
                            .with_source(from.name_arc())
                            .with_target(to.name_arc())
                            .with_reason(err.as_label()),
                    );
                    return Err(err);
                }
                vec![Arc::clone(to)]
            }
            None => self
                .participants
                .read()
                .await
                .iter()
                .filter(|p| !Arc::ptr_eq(*p, from))
                .cloned()
                .collect(),
        };

        for recipient in &recipients {
            recipient.receive(message, from).await;
        }

        let mut ev = Event::new(EventKind::MessageDelivered)
            .with_source(from.name_arc())
            .with_count(recipients.len());
        if let Some(to) = to {
            ev = ev.with_target(to.name_arc());
        }
        self.bus.publish(ev);
        Ok(recipients.len())
    }

    /// Returns the participant registered under `name`.
    pub async fn get(&self, name: &str) -> Option<ParticipantRef> {
        self.participants
            .read()
            .await
            .iter()
            .find(|p| p.name() == name)
            .cloned()
    }

    /// Returns participant names in broadcast order.
    pub async fn participants(&self) -> Vec<String> {
        self.participants
            .read()
            .await
            .iter()
            .map(|p| p.name().to_string())
            .collect()
    }

    /// Number of registered names.
    pub async fn len(&self) -> usize {
        self.participants.read().await.len()
    }

    /// True if nobody is registered.
    pub async fn is_empty(&self) -> bool {
        self.participants.read().await.is_empty()
    }

    async fn holds(&self, participant: &ParticipantRef) -> bool {
        self.participants
            .read()
            .await
            .iter()
            .any(|p| Arc::ptr_eq(p, participant))
    }
}
