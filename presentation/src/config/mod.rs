//! Presentation-level configuration
//!
//! Settings for REPL behavior. The binary builds these
//! from the merged file configuration and command-line flags.

use std::path::PathBuf;

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplConfig {
    /// Show progress indicators
    pub show_progress: bool,
    /// Where line-editor history is persisted; `None` keeps it in memory only
    pub history_path: Option<PathBuf>,
}

impl ReplConfig {
    pub fn new(show_progress: bool, history_path: Option<PathBuf>) -> Self {
        Self {
            show_progress,
            history_path,
        }
    }
}
