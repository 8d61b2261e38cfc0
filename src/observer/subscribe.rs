//! # Core subscriber trait
//!
//! `Subscribe` is the notify capability the [`SubscriptionRegistry`](crate::SubscriptionRegistry)
//! drives on every `fire()`. A subscriber has no attributes beyond its identity:
//! two handles are the same subscriber only if they point at the same allocation.

use std::sync::Arc;

use async_trait::async_trait;

/// Contract for subscribers.
///
/// Called inline from `fire()`, one subscriber at a time. Implementations should
/// avoid blocking the async runtime.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Zero-argument notification. Output is ignored by the registry.
    async fn notify(&self);

    /// Human-readable name (for sink lines and events).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared subscriber handle. Identity is the pointer, not the value.
pub type SubscriberRef = Arc<dyn Subscribe>;

/// Returns true if both handles refer to the same subscriber allocation.
#[inline]
pub(crate) fn same_subscriber(a: &SubscriberRef, b: &SubscriberRef) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
