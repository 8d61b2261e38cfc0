//! # Logging sinks.
//!
//! A [`LogSink`] is the only output path of the registries: every
//! human-readable line (subscription notices, delivered messages, member
//! descriptions) is handed to the sink injected at construction.
//!
//! ## Built-in sinks
//! - [`TracingSink`] forwards lines to `tracing` at `info` level
//! - [`MemorySink`] keeps lines in memory (tests, demos)
//! - `StdoutSink` prints lines (feature `logging`, demo/reference only)

mod memory;
mod sink;
#[cfg(feature = "logging")]
mod stdout;
mod tracing_sink;

pub use memory::MemorySink;
pub use sink::{LogSink, SinkRef};
#[cfg(feature = "logging")]
pub use stdout::StdoutSink;
pub use tracing_sink::TracingSink;
