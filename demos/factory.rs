//! # Example: factory
//!
//! Builds a member roster from tier names and stores a few items, printing
//! everything through `StdoutSink`.
//!
//! ## Run
//! Requires the `logging` feature to export `StdoutSink`.
//! ```bash
//! cargo run --example factory --features logging
//! ```

use std::sync::Arc;

use switchboard::{Config, Item, StdoutSink, Switchboard};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let sb = Switchboard::builder(Config::default())
        .with_sink(Arc::new(StdoutSink::new()))
        .build();

    let roster = [
        ("John Doe", "simple"),
        ("Chris Jackson", "super"),
        ("Janice Williams", "simple"),
        ("Tom Smith", "standard"),
        ("Mystery Guest", "platinum"),
    ];
    for (name, tier) in roster {
        match sb.members().create(name, tier) {
            Ok(member) => sb.members().define(&member),
            Err(err) => println!("[skipped] {name}: {err}"),
        }
    }

    sb.items().add(Item::new(1, "John")).await;
    println!("{:?}", sb.items().get(1).await);
}
