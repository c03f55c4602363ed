//! Saved chat sessions

use super::entities::Message;
use crate::core::string::take_chars;
use serde::{Deserialize, Serialize};

/// Number of leading question characters used as a session title
pub const SESSION_TITLE_CHARS: usize = 20;

/// Title used when the triggering question is empty
pub const DEFAULT_SESSION_TITLE: &str = "New conversation";

/// A saved snapshot of a transcript (Entity)
///
/// Created once per answered question and never mutated afterwards.
/// `messages` is an owned copy, so later changes to the live transcript
/// cannot reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSession {
    id: u32,
    title: String,
    messages: Vec<Message>,
}

impl ChatSession {
    pub fn new(id: u32, question: &str, messages: Vec<Message>) -> Self {
        Self {
            id,
            title: Self::title_for(question),
            messages,
        }
    }

    /// Derive a session title from the question that created it
    pub fn title_for(question: &str) -> String {
        let title = take_chars(question, SESSION_TITLE_CHARS);
        if title.is_empty() {
            DEFAULT_SESSION_TITLE.to_string()
        } else {
            title.to_string()
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_short_question() {
        assert_eq!(ChatSession::title_for("What is X?"), "What is X?");
    }

    #[test]
    fn test_title_truncated_to_twenty_chars() {
        let title = ChatSession::title_for("How do I configure the ingestion pipeline?");
        assert_eq!(title, "How do I configure t");
        assert_eq!(title.chars().count(), SESSION_TITLE_CHARS);
    }

    #[test]
    fn test_title_multibyte() {
        let question = "プロジェクトのドキュメントはどこに保存されていますか";
        let title = ChatSession::title_for(question);
        assert_eq!(title.chars().count(), SESSION_TITLE_CHARS);
        assert!(question.starts_with(&title));
    }

    #[test]
    fn test_title_fallback_when_empty() {
        assert_eq!(ChatSession::title_for(""), DEFAULT_SESSION_TITLE);
    }

    #[test]
    fn test_session_owns_messages() {
        let mut live = vec![Message::question("q"), Message::answer("a", None)];
        let session = ChatSession::new(1, "q", live.clone());
        live.push(Message::question("later"));
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.id(), 1);
        assert_eq!(session.title(), "q");
    }
}
