//! # Example: observer
//!
//! Subscribes two clock readers, fires, unsubscribes one and fires again.
//!
//! ## Flow
//! ```text
//! subscribe(ms) ─► subscribe(s) ─► fire() ─► unsubscribe(ms) ─► fire()
//!                                   ├─► ms                        └─► s
//!                                   └─► s
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=info cargo run --example observer
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use switchboard::{Config, SubscriberFn, SubscriberRef, Switchboard};
use tracing_subscriber::EnvFilter;

fn since_epoch() -> std::time::Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let sb = Switchboard::new(Config::default());

    let ms: SubscriberRef = SubscriberFn::arc("getCurMilliseconds", || async {
        tracing::info!("Current Milliseconds: {}", since_epoch().subsec_millis());
    });
    let s: SubscriberRef = SubscriberFn::arc("getCurSeconds", || async {
        tracing::info!("Current Seconds: {}", since_epoch().as_secs() % 60);
    });

    sb.registry().subscribe(ms.clone()).await;
    sb.registry().subscribe(s.clone()).await;
    sb.registry().fire().await;

    sb.registry().unsubscribe(&ms).await;
    sb.registry().fire().await;
}
