//! Application layer for ragchat
//!
//! This crate contains the two state managers of the client and the ports
//! they talk through. It depends only on the domain layer.
//!
//! - [`ConversationSession`] owns the transcript, the saved history and the
//!   generation lock, and drives question/answer rounds.
//! - [`ProjectDirectory`] mirrors the project registry into a local list.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    confirmation::{
        AutoApproveConfirmation, AutoRejectConfirmation, ConfirmationError, ConfirmationPort,
    },
    conversation_logger::{
        ConversationEvent, ConversationLogger, EventKind, NoConversationLogger,
    },
    error::GatewayError,
    progress::{NoSessionProgress, SessionProgress},
    project_registry::{ProjectRegistry, RegisteredProject},
    qa_gateway::{AskRequest, QaAnswer, QaGateway},
};
pub use use_cases::conversation::{ConversationSession, RoundOutcome, SessionError};
pub use use_cases::project_directory::{DeleteOutcome, DirectoryError, ProjectDirectory};
