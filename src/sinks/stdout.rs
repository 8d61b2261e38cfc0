//! # StdoutSink — simple line printer
//!
//! Prints every line to stdout. Use it for demos.

use super::LogSink;

/// Sink that prints each line to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl StdoutSink {
    /// Construct a new [`StdoutSink`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for StdoutSink {
    fn write_line(&self, line: &str) {
        println!("{line}");
    }
}
