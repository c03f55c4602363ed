//! Port for structured conversation logging.
//!
//! The managers report each round and each directory change through
//! [`ConversationLogger`]. Diagnostic messages still go through `tracing`;
//! this port is the machine-readable record of what was asked and answered.

use serde_json::Value;

/// What happened, as written to the `type` field of a log record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    QuestionSent,
    AnswerReceived,
    RoundFailed,
    ProjectRegistered,
    ProjectDeleted,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::QuestionSent => "question_sent",
            EventKind::AnswerReceived => "answer_received",
            EventKind::RoundFailed => "round_failed",
            EventKind::ProjectRegistered => "project_registered",
            EventKind::ProjectDeleted => "project_deleted",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logged event with its JSON payload
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationEvent {
    pub kind: EventKind,
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(kind: EventKind, payload: Value) -> Self {
        Self { kind, payload }
    }
}

/// Sink for conversation events.
///
/// Infallible: adapters drop their own write failures so a broken log never
/// interrupts a round.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// Discards every event
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_names() {
        assert_eq!(EventKind::QuestionSent.as_str(), "question_sent");
        assert_eq!(EventKind::ProjectDeleted.to_string(), "project_deleted");
    }
}
