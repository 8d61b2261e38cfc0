//! # Participant: named sender/recipient bound to at most one router.

use std::sync::{Arc, Weak};

use tokio::sync::RwLock;

use crate::error::RouterError;

use super::inbox::{Envelope, InboxRef};
use super::router::MessageRouter;

/// Shared participant handle. Identity is the pointer, not the name.
pub type ParticipantRef = Arc<Participant>;

/// A named entity that sends and receives through a [`MessageRouter`].
///
/// The router back-reference is set by [`MessageRouter::register`] and never cleared;
/// registering with a second router rebinds it.
pub struct Participant {
    name: Arc<str>,
    inbox: InboxRef,
    router: RwLock<Weak<MessageRouter>>,
}

impl Participant {
    /// Creates an unregistered participant.
    pub fn new(name: impl Into<Arc<str>>, inbox: InboxRef) -> ParticipantRef {
        Arc::new(Self {
            name: name.into(),
            inbox,
            router: RwLock::new(Weak::new()),
        })
    }

    /// Participant name (the router key).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn name_arc(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    /// Owning router, if registered and still alive.
    pub async fn router(&self) -> Option<Arc<MessageRouter>> {
        self.router.read().await.upgrade()
    }

    /// True if the participant has a live owning router.
    pub async fn is_registered(&self) -> bool {
        self.router().await.is_some()
    }

    pub(crate) async fn bind(&self, router: &Arc<MessageRouter>) {
        *self.router.write().await = Arc::downgrade(router);
    }

    /// Sends `message` through the owning router with `self` as sender.
    ///
    /// `to = None` broadcasts to every other registered participant.
    /// Returns the number of deliveries.
    ///
    /// # Errors
    /// - [`RouterError::NotRegistered`] if there is no owning router.
    /// - [`RouterError::UnknownParticipant`] if the router rejects the recipient.
    pub async fn send(
        self: &Arc<Self>,
        message: &str,
        to: Option<&ParticipantRef>,
    ) -> Result<usize, RouterError> {
        let Some(router) = self.router().await else {
            tracing::warn!(participant = %self.name, "send without router");
            return Err(RouterError::NotRegistered {
                participant: self.name.to_string(),
            });
        };
        router.send(message, self, to).await
    }

    /// Hands an already-routed message to this participant's inbox.
    pub async fn receive(&self, message: &str, from: &Participant) {
        let envelope = Envelope {
            from: from.name_arc(),
            to: self.name_arc(),
            message: message.into(),
        };
        self.inbox.receive(&envelope).await;
    }
}

impl std::fmt::Debug for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Participant")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
