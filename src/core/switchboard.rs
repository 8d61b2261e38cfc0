//! # Switchboard: the caller-owned context.
//!
//! Holds exactly one instance of each component. Nothing here is global: create
//! a `Switchboard` at the entry point and pass it (or its parts) to whatever
//! handles input events.
//!
//! ```rust
//! use std::sync::Arc;
//! use switchboard::{Config, MemorySink, SubscriberFn, Switchboard};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sink = Arc::new(MemorySink::new());
//!     let sb = Switchboard::builder(Config::default())
//!         .with_sink(sink.clone())
//!         .build();
//!
//!     let tick = SubscriberFn::arc("tick", || async {});
//!     sb.registry().subscribe(tick.clone()).await;
//!     sb.registry().fire().await;
//!
//!     let brad = sb.join("brad").await;
//!     let jeff = sb.join("jeff").await;
//!     brad.send("Hello Jeff", Some(&jeff)).await?;
//!
//!     assert_eq!(
//!         sink.lines(),
//!         vec!["You are now subscribed to tick", "brad to jeff: Hello Jeff"]
//!     );
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::{
    core::{Config, SwitchboardBuilder},
    events::{Bus, Event},
    items::ItemStore,
    mediator::{LogInbox, MessageRouter, Participant, ParticipantRef},
    membership::MemberFactory,
    observer::SubscriptionRegistry,
    sinks::SinkRef,
};

/// Owns one subscription registry, one message router, one item store and one
/// member factory, all writing to the same sink and bus.
pub struct Switchboard {
    cfg: Config,
    bus: Bus,
    sink: SinkRef,
    registry: SubscriptionRegistry,
    router: Arc<MessageRouter>,
    items: ItemStore,
    members: MemberFactory,
}

impl Switchboard {
    /// Returns a builder for the given configuration.
    pub fn builder(cfg: Config) -> SwitchboardBuilder {
        SwitchboardBuilder::new(cfg)
    }

    /// Builds a switchboard that logs through `tracing`.
    pub fn new(cfg: Config) -> Self {
        SwitchboardBuilder::new(cfg).build()
    }

    pub(super) fn new_internal(
        cfg: Config,
        bus: Bus,
        sink: SinkRef,
        registry: SubscriptionRegistry,
        router: Arc<MessageRouter>,
        items: ItemStore,
        members: MemberFactory,
    ) -> Self {
        Self {
            cfg,
            bus,
            sink,
            registry,
            router,
            items,
            members,
        }
    }

    /// Settings this switchboard was built with.
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Sink shared by every component.
    pub fn sink(&self) -> &SinkRef {
        &self.sink
    }

    /// Observer registry.
    pub fn registry(&self) -> &SubscriptionRegistry {
        &self.registry
    }

    /// Participant router.
    pub fn router(&self) -> &Arc<MessageRouter> {
        &self.router
    }

    /// Item store.
    pub fn items(&self) -> &ItemStore {
        &self.items
    }

    /// Member factory.
    pub fn members(&self) -> &MemberFactory {
        &self.members
    }

    /// Receiver for observability events published after this call.
    pub fn events(&self) -> broadcast::Receiver<Event> {
        self.bus.subscribe()
    }

    /// Creates a participant whose inbox writes to the switchboard sink and
    /// registers it with the router.
    pub async fn join(&self, name: &str) -> ParticipantRef {
        let participant = Participant::new(name, LogInbox::arc(Arc::clone(&self.sink)));
        self.router.register(&participant).await;
        participant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventKind;
    use crate::items::Item;
    use crate::observer::SubscriberFn;
    use crate::sinks::MemorySink;
    use crate::RouterError;

    fn switchboard() -> (Switchboard, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let sb = Switchboard::builder(Config::default())
            .with_sink(sink.clone())
            .build();
        (sb, sink)
    }

    #[tokio::test]
    async fn test_chatroom_transcript() {
        let (sb, sink) = switchboard();
        let brad = sb.join("brad").await;
        let jeff = sb.join("jeff").await;
        let sara = sb.join("sara").await;

        brad.send("Hello Jeff", Some(&jeff)).await.unwrap();
        sara.send("Hello Brad, you are the best dev ever!", Some(&brad))
            .await
            .unwrap();
        jeff.send("Hello Everyone!!!!", None).await.unwrap();

        assert_eq!(
            sink.lines(),
            vec![
                "brad to jeff: Hello Jeff",
                "sara to brad: Hello Brad, you are the best dev ever!",
                "jeff to brad: Hello Everyone!!!!",
                "jeff to sara: Hello Everyone!!!!",
            ]
        );
    }

    #[tokio::test]
    async fn test_components_share_bus() {
        let (sb, _sink) = switchboard();
        let mut rx = sb.events();

        let tick = SubscriberFn::arc("tick", || async {});
        sb.registry().subscribe(tick).await;
        let brad = sb.join("brad").await;
        brad.send("anyone?", None).await.unwrap();

        let kinds: Vec<EventKind> = std::iter::from_fn(|| rx.try_recv().ok())
            .map(|ev| ev.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::Subscribed,
                EventKind::ParticipantRegistered,
                EventKind::MessageDelivered,
            ]
        );
    }

    #[tokio::test]
    async fn test_foreign_participant_rejected() {
        let (sb, _sink) = switchboard();
        let (other, _other_sink) = switchboard();
        let brad = sb.join("brad").await;
        let stranger = other.join("stranger").await;

        assert_eq!(
            brad.send("hi", Some(&stranger)).await,
            Err(RouterError::UnknownParticipant {
                participant: "stranger".into()
            })
        );
    }

    #[tokio::test]
    async fn test_items_and_members_write_to_shared_sink() {
        let (sb, sink) = switchboard();
        sb.items().add(Item::new(1, "John")).await;
        let member = sb.members().create("John Doe", "simple").unwrap();
        sb.members().define(&member);

        assert_eq!(sink.lines(), vec!["Item Added...", "John Doe (simple): $5"]);
    }
}
