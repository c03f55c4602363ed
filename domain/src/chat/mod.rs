//! Chat domain.
//!
//! - [`entities::Message`] - a single question or answer in a transcript
//! - [`entities::SourceDocument`] - the document an answer was drawn from
//! - [`session::ChatSession`] - a saved, immutable snapshot of a transcript

pub mod entities;
pub mod session;
