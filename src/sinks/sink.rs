use std::sync::Arc;

/// Line-oriented logging capability.
///
/// Implementations must not block for long: sinks are called inline from
/// registry and router operations.
pub trait LogSink: Send + Sync + 'static {
    /// Consumes one formatted line (without trailing newline).
    fn write_line(&self, line: &str);
}

/// Shared handle to a sink.
pub type SinkRef = Arc<dyn LogSink>;
