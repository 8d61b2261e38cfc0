//! # Example: chatroom
//!
//! Three participants talk through one router; the transcript is collected in a
//! [`MemorySink`] and printed at the end, followed by the observability events.
//!
//! ## Run
//! ```bash
//! cargo run --example chatroom
//! ```

use std::sync::Arc;

use switchboard::{Config, MemorySink, Participant, RouterError, Switchboard};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), RouterError> {
    tracing_subscriber::fmt::init();

    let sink = Arc::new(MemorySink::new());
    let sb = Switchboard::builder(Config::default())
        .with_sink(sink.clone())
        .build();
    let mut events = sb.events();

    let brad = sb.join("brad").await;
    let jeff = sb.join("jeff").await;
    let sara = sb.join("sara").await;

    brad.send("Hello Jeff", Some(&jeff)).await?;
    sara.send("Hello Brad, you are the best dev ever!", Some(&brad))
        .await?;
    jeff.send("Hello Everyone!!!!", None).await?;

    // Not registered: refused before anything is delivered.
    let lurker = Participant::new("lurker", switchboard::LogInbox::arc(sink.clone()));
    if let Err(err) = lurker.send("psst", Some(&brad)).await {
        println!("[refused] {err}");
    }
    if let Err(err) = brad.send("psst", Some(&lurker)).await {
        println!("[refused] {err}");
    }

    for line in sink.lines() {
        println!("{line}");
    }
    while let Ok(ev) = events.try_recv() {
        println!(
            "[event #{}] {:?} source={:?} target={:?} count={:?}",
            ev.seq, ev.kind, ev.source, ev.target, ev.count
        );
    }
    Ok(())
}
