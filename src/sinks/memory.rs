//! # MemorySink — captures lines in memory
//!
//! Keeps every written line in order. Tests assert on [`MemorySink::lines`];
//! demos print them at the end.

use std::sync::{Mutex, MutexGuard};

use super::LogSink;

/// Sink that records lines in write order.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Construct an empty [`MemorySink`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all lines written so far.
    pub fn lines(&self) -> Vec<String> {
        self.guard().clone()
    }

    /// Removes and returns all lines written so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.guard())
    }

    /// A panicking writer cannot leave a half-pushed line behind, so a poisoned
    /// lock is still safe to read.
    fn guard(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.guard().push(line.to_owned());
    }
}
