use std::sync::Arc;

use crate::{
    core::Config,
    events::Bus,
    items::ItemStore,
    mediator::MessageRouter,
    membership::MemberFactory,
    observer::SubscriptionRegistry,
    sinks::{SinkRef, TracingSink},
};

use super::switchboard::Switchboard;

/// Builder for constructing a [`Switchboard`].
pub struct SwitchboardBuilder {
    cfg: Config,
    sink: Option<SinkRef>,
}

impl SwitchboardBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self { cfg, sink: None }
    }

    /// Sets the sink every component writes its lines to.
    ///
    /// Defaults to [`TracingSink`].
    pub fn with_sink(mut self, sink: SinkRef) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Builds the switchboard.
    ///
    /// All components share one bus and one sink.
    pub fn build(self) -> Switchboard {
        let bus = Bus::from_config(&self.cfg);
        let sink: SinkRef = match self.sink {
            Some(sink) => sink,
            None => Arc::new(TracingSink::new()),
        };

        let registry = SubscriptionRegistry::new(Arc::clone(&sink), bus.clone());
        let router = MessageRouter::new(&self.cfg, bus.clone());
        let items = ItemStore::new(Arc::clone(&sink));
        let members = MemberFactory::new(Arc::clone(&sink));

        Switchboard::new_internal(self.cfg, bus, sink, registry, router, items, members)
    }
}
