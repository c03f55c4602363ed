//! Project domain.
//!
//! - [`entities::Project`] - a named binding to an external document source
//! - [`entities::ProjectDraft`] - registration form state owned by the caller

pub mod entities;
