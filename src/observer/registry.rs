//! # SubscriptionRegistry: ordered subscribers, sequential isolated fan-out
//!
//! ## What it guarantees
//! - Registration order is firing order; duplicates are kept and fired once per entry.
//! - `unsubscribe` removes **every** entry with the same identity.
//! - One panicking subscriber never suppresses the rest of a `fire()` pass.
//!
//! ## What it does **not** guarantee
//! - Changes made by subscribers during `fire()` only apply to the next pass
//!   (the pass works on a snapshot).
//!
//! ## Panic handling
//! Each notification runs under `catch_unwind`:
//! - Panic is caught, logged with `warn!` and published as `SubscriberPanicked`
//! - The pass continues with the next subscriber
//!
//! **Warning**: `AssertUnwindSafe` is used, which can leave shared state inconsistent
//! if a subscriber uses `Arc<Mutex<T>>` and panics while holding the lock.

use std::any::Any;

use futures::FutureExt;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::events::{Bus, Event, EventKind};
use crate::sinks::SinkRef;

use super::subscribe::{SubscriberRef, same_subscriber};

/// Ordered registry of subscriber identities.
pub struct SubscriptionRegistry {
    subscribers: RwLock<Vec<SubscriberRef>>,
    sink: SinkRef,
    bus: Bus,
}

impl SubscriptionRegistry {
    /// Creates an empty registry writing notices to `sink` and events to `bus`.
    pub fn new(sink: SinkRef, bus: Bus) -> Self {
        Self {
            subscribers: RwLock::new(Vec::new()),
            sink,
            bus,
        }
    }

    /// Appends `sub` unconditionally; subscribing the same handle twice keeps both entries.
    pub async fn subscribe(&self, sub: SubscriberRef) {
        let name = sub.name().to_owned();
        let len = {
            let mut subs = self.subscribers.write().await;
            subs.push(sub);
            subs.len()
        };

        self.sink
            .write_line(&format!("You are now subscribed to {name}"));
        debug!(subscriber = %name, len, "subscribed");
        self.bus.publish(
            Event::new(EventKind::Subscribed)
                .with_source(name)
                .with_count(len),
        );
    }

    /// Removes all entries identical to `sub` and returns how many were removed.
    ///
    /// Unknown handles are a silent no-op; the notice is written either way.
    pub async fn unsubscribe(&self, sub: &SubscriberRef) -> usize {
        let removed = {
            let mut subs = self.subscribers.write().await;
            let before = subs.len();
            subs.retain(|s| !same_subscriber(s, sub));
            before - subs.len()
        };

        let name = sub.name();
        self.sink
            .write_line(&format!("You are now unsubscribed from {name}"));
        debug!(subscriber = %name, removed, "unsubscribed");
        self.bus.publish(
            Event::new(EventKind::Unsubscribed)
                .with_source(name)
                .with_count(removed),
        );
        removed
    }

    /// Notifies every subscriber in registration order.
    pub async fn fire(&self) {
        let snapshot: Vec<SubscriberRef> = self.subscribers.read().await.clone();

        for sub in &snapshot {
            // notify() itself may panic before handing back a future
            let fut = async { sub.notify().await };
            if let Err(panic_err) = std::panic::AssertUnwindSafe(fut).catch_unwind().await {
                let info = panic_info(&*panic_err);
                warn!(subscriber = %sub.name(), info = %info, "subscriber panicked");
                self.bus
                    .publish(Event::subscriber_panicked(sub.name(), info));
            }
        }

        debug!(notified = snapshot.len(), "fired");
        self.bus
            .publish(Event::new(EventKind::Fired).with_count(snapshot.len()));
    }

    /// Number of entries (duplicates counted).
    pub async fn len(&self) -> usize {
        self.subscribers.read().await.len()
    }

    /// True if there are no subscribers.
    pub async fn is_empty(&self) -> bool {
        self.subscribers.read().await.is_empty()
    }
}

fn panic_info(any: &(dyn Any + Send)) -> String {
    if let Some(msg) = any.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = any.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::Subscribe;
    use crate::sinks::MemorySink;
    use async_trait::async_trait;
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::{Arc, Mutex};

    type Calls = Arc<Mutex<Vec<&'static str>>>;

    struct Recorder {
        name: &'static str,
        calls: Calls,
    }

    #[async_trait]
    impl Subscribe for Recorder {
        async fn notify(&self) {
            self.calls.lock().unwrap().push(self.name);
        }
        fn name(&self) -> &str {
            self.name
        }
    }

    struct Exploder;

    #[async_trait]
    impl Subscribe for Exploder {
        async fn notify(&self) {
            panic!("exploded");
        }
        fn name(&self) -> &str {
            "exploder"
        }
    }

    /// Panics while building its future, before anything is polled.
    struct EagerExploder;

    impl Subscribe for EagerExploder {
        fn notify<'life0, 'async_trait>(
            &'life0 self,
        ) -> Pin<Box<dyn Future<Output = ()> + Send + 'async_trait>>
        where
            'life0: 'async_trait,
            Self: 'async_trait,
        {
            panic!("eager");
        }
        fn name(&self) -> &str {
            "eager"
        }
    }

    fn recorder(name: &'static str, calls: &Calls) -> SubscriberRef {
        Arc::new(Recorder {
            name,
            calls: Arc::clone(calls),
        })
    }

    fn registry() -> (SubscriptionRegistry, Arc<MemorySink>, Bus) {
        let sink = Arc::new(MemorySink::new());
        let bus = Bus::new(64);
        let reg = SubscriptionRegistry::new(sink.clone(), bus.clone());
        (reg, sink, bus)
    }

    #[tokio::test]
    async fn test_duplicates_fire_in_registration_order() {
        let (reg, _sink, _bus) = registry();
        let calls = Calls::default();
        let a = recorder("a", &calls);
        let b = recorder("b", &calls);

        reg.subscribe(a.clone()).await;
        reg.subscribe(b.clone()).await;
        reg.subscribe(a.clone()).await;
        reg.fire().await;

        assert_eq!(*calls.lock().unwrap(), vec!["a", "b", "a"]);
        assert_eq!(reg.len().await, 3);
    }

    #[tokio::test]
    async fn test_unsubscribe_removes_every_occurrence() {
        let (reg, _sink, _bus) = registry();
        let calls = Calls::default();
        let a = recorder("a", &calls);
        let b = recorder("b", &calls);

        reg.subscribe(a.clone()).await;
        reg.subscribe(b.clone()).await;
        reg.subscribe(a.clone()).await;

        assert_eq!(reg.unsubscribe(&a).await, 2);
        reg.fire().await;

        assert_eq!(*calls.lock().unwrap(), vec!["b"]);
    }

    #[tokio::test]
    async fn test_unsubscribed_event_counts_removed_entries() {
        let (reg, _sink, bus) = registry();
        let calls = Calls::default();
        let a = recorder("a", &calls);
        let x = recorder("x", &calls);

        reg.subscribe(a.clone()).await;
        reg.subscribe(a.clone()).await;

        let mut rx = bus.subscribe();
        reg.unsubscribe(&a).await;
        reg.unsubscribe(&x).await;

        let counts: Vec<(Option<String>, Option<usize>)> = std::iter::from_fn(|| rx.try_recv().ok())
            .filter(|ev| ev.kind == EventKind::Unsubscribed)
            .map(|ev| (ev.source.as_deref().map(str::to_string), ev.count))
            .collect();
        assert_eq!(
            counts,
            vec![(Some("a".to_string()), Some(2)), (Some("x".to_string()), Some(0))]
        );
    }

    #[tokio::test]
    async fn test_unsubscribe_unknown_is_noop() {
        let (reg, sink, _bus) = registry();
        let calls = Calls::default();
        let a = recorder("a", &calls);
        let x = recorder("x", &calls);

        reg.subscribe(a.clone()).await;
        assert_eq!(reg.unsubscribe(&x).await, 0);
        reg.fire().await;

        assert_eq!(*calls.lock().unwrap(), vec!["a"]);
        assert_eq!(
            sink.lines(),
            vec!["You are now subscribed to a", "You are now unsubscribed from x"]
        );
    }

    #[tokio::test]
    async fn test_identity_not_name() {
        let (reg, _sink, _bus) = registry();
        let calls = Calls::default();
        let first = recorder("same", &calls);
        let second = recorder("same", &calls);

        reg.subscribe(first.clone()).await;
        reg.subscribe(second.clone()).await;
        assert_eq!(reg.unsubscribe(&first).await, 1);
        assert_eq!(reg.len().await, 1);
    }

    #[tokio::test]
    async fn test_panicking_subscriber_is_isolated() {
        let (reg, _sink, bus) = registry();
        let mut rx = bus.subscribe();
        let calls = Calls::default();

        reg.subscribe(recorder("before", &calls)).await;
        reg.subscribe(Arc::new(Exploder)).await;
        reg.subscribe(recorder("after", &calls)).await;
        reg.fire().await;

        assert_eq!(*calls.lock().unwrap(), vec!["before", "after"]);

        let mut panicked = None;
        let mut fired = None;
        while let Ok(ev) = rx.try_recv() {
            match ev.kind {
                EventKind::SubscriberPanicked => panicked = Some(ev),
                EventKind::Fired => fired = Some(ev),
                _ => {}
            }
        }
        let panicked = panicked.expect("panic event");
        assert_eq!(panicked.source.as_deref(), Some("exploder"));
        assert_eq!(panicked.reason.as_deref(), Some("exploded"));
        assert_eq!(fired.expect("fired event").count, Some(3));
    }

    #[tokio::test]
    async fn test_eager_panic_is_isolated() {
        let (reg, _sink, bus) = registry();
        let mut rx = bus.subscribe();
        let calls = Calls::default();

        reg.subscribe(Arc::new(EagerExploder)).await;
        reg.subscribe(recorder("after", &calls)).await;
        reg.fire().await;

        assert_eq!(*calls.lock().unwrap(), vec!["after"]);

        let panicked = std::iter::from_fn(|| rx.try_recv().ok())
            .find(|ev| ev.is_subscriber_panic())
            .expect("panic event");
        assert_eq!(panicked.source.as_deref(), Some("eager"));
        assert_eq!(panicked.reason.as_deref(), Some("eager"));
    }

    #[tokio::test]
    async fn test_fire_on_empty_registry() {
        let (reg, _sink, _bus) = registry();
        assert!(reg.is_empty().await);
        reg.fire().await;
    }

    #[tokio::test]
    async fn test_subscribe_during_fire_applies_next_pass() {
        let (reg, _sink, _bus) = registry();
        let reg = Arc::new(reg);
        let calls = Calls::default();
        let late = recorder("late", &calls);

        struct Subscriber {
            reg: Arc<SubscriptionRegistry>,
            late: SubscriberRef,
        }

        #[async_trait]
        impl Subscribe for Subscriber {
            async fn notify(&self) {
                self.reg.subscribe(self.late.clone()).await;
            }
        }

        reg.subscribe(Arc::new(Subscriber {
            reg: Arc::clone(&reg),
            late: late.clone(),
        }))
        .await;

        reg.fire().await;
        assert!(calls.lock().unwrap().is_empty());

        reg.fire().await;
        assert_eq!(*calls.lock().unwrap(), vec!["late"]);
    }
}
