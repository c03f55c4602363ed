//! Use cases
//!
//! Application-level state managers that orchestrate domain logic.

pub mod conversation;
pub mod project_directory;
