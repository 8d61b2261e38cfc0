//! # Observer: ordered subscriber registry with isolated fan-out.
//!
//! ## Architecture
//! ```text
//! subscribe(a) ─┐
//! subscribe(b) ─┼──► SubscriptionRegistry [a, b, a]
//! subscribe(a) ─┘            │
//!                          fire()
//!                            ├──► a.notify()
//!                            ├──► b.notify()   (panic → SubscriberPanicked, pass continues)
//!                            └──► a.notify()
//! ```
//!
//! ## Implementing custom subscribers
//! ```no_run
//! use switchboard::Subscribe;
//! use async_trait::async_trait;
//!
//! struct Seconds;
//!
//! #[async_trait]
//! impl Subscribe for Seconds {
//!     async fn notify(&self) {
//!         // read the clock, write somewhere
//!     }
//!     fn name(&self) -> &str { "getCurSeconds" }
//! }
//! ```

mod registry;
mod subscribe;
mod subscriber_fn;

pub use registry::SubscriptionRegistry;
pub use subscribe::{Subscribe, SubscriberRef};
pub use subscriber_fn::SubscriberFn;
