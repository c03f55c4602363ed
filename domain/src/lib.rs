//! Domain layer for ragchat
//!
//! This crate contains the entities and value objects of the chat client.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Transcript and History
//!
//! - **Transcript**: the live, ordered list of [`Message`]s currently shown
//! - **ChatSession**: an immutable snapshot saved after each answered question
//!
//! ## Projects
//!
//! A [`Project`] binds a name to an external document source. Every question
//! is scoped to exactly one project.

pub mod chat;
pub mod core;
pub mod project;

// Re-export commonly used types
pub use chat::{
    entities::{Message, Role, SourceDocument},
    session::{ChatSession, DEFAULT_SESSION_TITLE, SESSION_TITLE_CHARS},
};
pub use crate::core::{error::ValidationError, string::preview};
pub use project::entities::{Project, ProjectDraft};
