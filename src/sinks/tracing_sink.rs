//! # TracingSink — forwards sink lines to `tracing`
//!
//! Lines are emitted as `info` events under the `switchboard` target, so they
//! can be filtered with `RUST_LOG=switchboard=info`.

use super::LogSink;

/// Sink that emits each line as a `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    /// Construct a new [`TracingSink`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for TracingSink {
    fn write_line(&self, line: &str) {
        tracing::info!(target: "switchboard", "{line}");
    }
}
