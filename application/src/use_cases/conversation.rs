//! Conversation session manager.
//!
//! Owns the live transcript, the saved history and the generation lock, and
//! runs one question/answer round at a time against a [`QaGateway`].
//!
//! A round goes `Idle -> Sending -> Idle`:
//! 1. The question is appended to the transcript immediately
//! 2. The gateway is asked once (no retry)
//! 3. On success the answer is appended and a [`ChatSession`] snapshot saved
//! 4. On failure nothing else changes; the question stays in the transcript

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, EventKind, NoConversationLogger,
};
use crate::ports::error::GatewayError;
use crate::ports::progress::SessionProgress;
use crate::ports::qa_gateway::{AskRequest, QaGateway};
use ragchat_domain::{ChatSession, Message, ValidationError, preview};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that reject a call before any state changes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("A response is still being generated")]
    Busy,

    #[error("No saved session with id {0}")]
    UnknownSession(u32),
}

/// How a question/answer round ended.
///
/// A failed round is not an error of `send_question`: the manager is back
/// in a sendable state and the caller only needs to tell the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The answer was appended and saved as history entry `session_id`
    Answered { session_id: u32 },
    /// No answer; the transcript keeps only the question
    Failed(GatewayError),
}

impl RoundOutcome {
    pub fn is_answered(&self) -> bool {
        matches!(self, RoundOutcome::Answered { .. })
    }
}

/// Holds the generating flag for the duration of a round.
///
/// Released on drop, so the flag is cleared on success, on failure and when
/// the round's future is dropped mid-flight.
struct GenerationLock<'a> {
    generating: &'a mut bool,
}

impl<'a> GenerationLock<'a> {
    fn acquire(generating: &'a mut bool) -> Option<Self> {
        if *generating {
            return None;
        }
        *generating = true;
        Some(Self { generating })
    }
}

impl Drop for GenerationLock<'_> {
    fn drop(&mut self) {
        *self.generating = false;
    }
}

/// Conversation Session Manager
///
/// At most one question is outstanding at a time. History entries are value
/// snapshots: selecting one copies its messages into the transcript, and
/// nothing done to the transcript afterwards reaches the saved entry.
pub struct ConversationSession {
    gateway: Arc<dyn QaGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
    transcript: Vec<Message>,
    history: Vec<ChatSession>,
    generating: bool,
    selected_project: Option<String>,
}

impl ConversationSession {
    pub fn new(gateway: Arc<dyn QaGateway>) -> Self {
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
            transcript: Vec::new(),
            history: Vec::new(),
            generating: false,
            selected_project: None,
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Store the project questions are scoped to.
    ///
    /// The value is not checked against the directory; an empty name clears
    /// the selection.
    pub fn select_project(&mut self, name: impl Into<String>) {
        let name = name.into();
        debug!("Selected project: {:?}", name);
        self.selected_project = if name.is_empty() { None } else { Some(name) };
    }

    pub fn selected_project(&self) -> Option<&str> {
        self.selected_project.as_deref()
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn history(&self) -> &[ChatSession] {
        &self.history
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// Ask `text` in the selected project.
    ///
    /// Returns `Err` only when the round could not start (no project
    /// selected, or a round already outstanding); in that case nothing was
    /// appended and no request was issued. Gateway failures come back as
    /// [`RoundOutcome::Failed`].
    pub async fn send_question(
        &mut self,
        text: &str,
        progress: &dyn SessionProgress,
    ) -> Result<RoundOutcome, SessionError> {
        let project = self
            .selected_project
            .clone()
            .ok_or(ValidationError::NoProjectSelected)?;
        let _lock = GenerationLock::acquire(&mut self.generating).ok_or(SessionError::Busy)?;

        info!("Asking project {}: {}", project, preview(text, 80));
        self.transcript.push(Message::question(text));
        progress.on_generation_start(&project);
        self.conversation_logger.log(ConversationEvent::new(
            EventKind::QuestionSent,
            serde_json::json!({
                "project": project,
                "question": text,
            }),
        ));

        let request = AskRequest::new(text, project.as_str());
        let outcome = match self.gateway.ask(&request).await {
            Ok(answer) => {
                let message = Message::answer(answer.answer, answer.source_document);
                progress.on_answer_received(&message);
                self.conversation_logger.log(ConversationEvent::new(
                    EventKind::AnswerReceived,
                    serde_json::json!({
                        "project": project,
                        "answer": message,
                    }),
                ));
                self.transcript.push(message);

                let session_id = self.history.len() as u32 + 1;
                self.history
                    .push(ChatSession::new(session_id, text, self.transcript.clone()));
                info!(
                    "Saved session #{} ({} messages)",
                    session_id,
                    self.transcript.len()
                );
                RoundOutcome::Answered { session_id }
            }
            Err(e) => {
                warn!("Failed to get an answer from project {}: {}", project, e);
                progress.on_round_failed(&e);
                self.conversation_logger.log(ConversationEvent::new(
                    EventKind::RoundFailed,
                    serde_json::json!({
                        "project": project,
                        "error": e.to_string(),
                    }),
                ));
                RoundOutcome::Failed(e)
            }
        };

        progress.on_generation_end(outcome.is_answered());
        Ok(outcome)
    }

    /// Replace the transcript with a copy of a saved session
    pub fn select_history_session(&mut self, id: u32) -> Result<(), SessionError> {
        let session = self
            .history
            .iter()
            .find(|s| s.id() == id)
            .ok_or(SessionError::UnknownSession(id))?;
        debug!("Restoring session #{} '{}'", id, session.title());
        self.transcript = session.messages().to_vec();
        Ok(())
    }

    /// Start an empty transcript; saved history is kept
    pub fn new_conversation(&mut self) {
        self.transcript.clear();
    }
}
