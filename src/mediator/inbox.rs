//! # Receive capability
//!
//! [`Inbox`] is what the router calls to hand a message to a participant.
//! [`LogInbox`] is the stock implementation: it writes
//! `{from} to {to}: {message}` to a sink and keeps no state.

use std::sync::Arc;

use async_trait::async_trait;

use crate::sinks::SinkRef;

/// A message in transit, tagged with sender and recipient names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
    /// Sender name.
    pub from: Arc<str>,
    /// Recipient name.
    pub to: Arc<str>,
    /// Message body.
    pub message: Arc<str>,
}

/// Contract for message recipients.
#[async_trait]
pub trait Inbox: Send + Sync + 'static {
    /// Accepts one delivered message.
    async fn receive(&self, envelope: &Envelope);
}

/// Shared inbox handle.
pub type InboxRef = Arc<dyn Inbox>;

/// Inbox that writes each delivery to a sink.
pub struct LogInbox {
    sink: SinkRef,
}

impl LogInbox {
    /// Creates an inbox writing to `sink`.
    pub fn new(sink: SinkRef) -> Self {
        Self { sink }
    }

    /// Creates the inbox and returns it as a shared handle.
    pub fn arc(sink: SinkRef) -> InboxRef {
        Arc::new(Self::new(sink))
    }
}

#[async_trait]
impl Inbox for LogInbox {
    async fn receive(&self, envelope: &Envelope) {
        self.sink.write_line(&format!(
            "{} to {}: {}",
            envelope.from, envelope.to, envelope.message
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;

    #[tokio::test]
    async fn test_log_inbox_line_format() {
        let sink = Arc::new(MemorySink::new());
        let inbox = LogInbox::new(sink.clone());
        inbox
            .receive(&Envelope {
                from: "brad".into(),
                to: "jeff".into(),
                message: "Hello Jeff".into(),
            })
            .await;
        assert_eq!(sink.lines(), vec!["brad to jeff: Hello Jeff"]);
    }
}
