//! Interactive confirmation for destructive actions.
//!
//! Before a project is deleted the user sees:
//!
//! ```text
//! Delete project 'handbook'? This cannot be undone. [y/N]
//! ```
//!
//! Only `y` or `yes` (any case) confirms. An empty line or anything else
//! declines, and end-of-input counts as a cancelled prompt.

use async_trait::async_trait;
use colored::Colorize;
use ragchat_application::{ConfirmationError, ConfirmationPort};
use std::io::{self, BufRead, Write};

/// Terminal-based [`ConfirmationPort`] reading a yes/no answer from stdin.
pub struct InteractiveConfirmation;

impl InteractiveConfirmation {
    pub fn new() -> Self {
        Self
    }

    /// Interpret a typed answer
    pub fn is_yes(input: &str) -> bool {
        matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
    }

    fn read_answer(prompt: &str) -> Result<bool, ConfirmationError> {
        print!("{} {} ", prompt.yellow().bold(), "[y/N]".dimmed());
        io::stdout().flush().map_err(|e| {
            ConfirmationError::IoError(format!("Failed to flush stdout: {}", e))
        })?;

        let mut input = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut input)
            .map_err(|e| ConfirmationError::IoError(format!("Failed to read input: {}", e)))?;

        if read == 0 {
            println!();
            return Err(ConfirmationError::Cancelled);
        }

        Ok(Self::is_yes(&input))
    }
}

impl Default for InteractiveConfirmation {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfirmationPort for InteractiveConfirmation {
    async fn confirm(&self, prompt: &str) -> Result<bool, ConfirmationError> {
        let prompt = prompt.to_string();
        tokio::task::spawn_blocking(move || Self::read_answer(&prompt))
            .await
            .map_err(|e| ConfirmationError::IoError(format!("Prompt task failed: {}", e)))?
    }
}
