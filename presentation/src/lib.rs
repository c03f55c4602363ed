//! Presentation layer for ragchat
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, the delete confirmation prompt and the
//! interactive chat interface.

pub mod chat;
pub mod cli;
pub mod config;
pub mod confirm;
pub mod output;
pub mod progress;
pub mod projects;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, Command, OutputFormat, ProjectsCommand};
pub use config::ReplConfig;
pub use confirm::InteractiveConfirmation;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress, progress_for_terminal};
pub use projects::ProjectsRunner;
