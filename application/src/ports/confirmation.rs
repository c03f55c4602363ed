//! Confirmation port for destructive actions.
//!
//! Deleting a project cannot be undone, so [`ProjectDirectory`] asks this
//! port before issuing the request.
//!
//! # Architecture
//!
//! - **Port**: [`ConfirmationPort`] - defined here in application layer
//! - **Adapter**: `InteractiveConfirmation` - implemented in presentation layer
//!
//! # Built-in Implementations
//!
//! - [`AutoApproveConfirmation`] - Always confirms (e.g. `--yes`)
//! - [`AutoRejectConfirmation`] - Always declines
//!
//! [`ProjectDirectory`]: crate::ProjectDirectory

use async_trait::async_trait;

/// Error type for confirmation prompts.
///
/// These errors represent failures while asking, not the user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationError {
    /// User aborted the prompt (e.g., via Ctrl+C).
    Cancelled,
    /// Input/output error (e.g., terminal read failure).
    IoError(String),
}

impl std::fmt::Display for ConfirmationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfirmationError::Cancelled => write!(f, "Confirmation cancelled"),
            ConfirmationError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ConfirmationError {}

/// Port for confirming a destructive action.
///
/// Returns `Ok(true)` only on an explicit yes.
#[async_trait]
pub trait ConfirmationPort: Send + Sync {
    async fn confirm(&self, prompt: &str) -> Result<bool, ConfirmationError>;
}

/// Confirms everything without asking.
///
/// # Warning
///
/// Deletions are irreversible. Only use for scripted runs where the caller
/// already decided.
pub struct AutoApproveConfirmation;

#[async_trait]
impl ConfirmationPort for AutoApproveConfirmation {
    async fn confirm(&self, _prompt: &str) -> Result<bool, ConfirmationError> {
        Ok(true)
    }
}

/// Declines everything without asking.
pub struct AutoRejectConfirmation;

#[async_trait]
impl ConfirmationPort for AutoRejectConfirmation {
    async fn confirm(&self, _prompt: &str) -> Result<bool, ConfirmationError> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_auto_approve_confirmation() {
        let confirmed = AutoApproveConfirmation.confirm("Delete?").await.unwrap();
        assert!(confirmed);
    }

    #[tokio::test]
    async fn test_auto_reject_confirmation() {
        let confirmed = AutoRejectConfirmation.confirm("Delete?").await.unwrap();
        assert!(!confirmed);
    }

    #[test]
    fn test_confirmation_error_display() {
        assert_eq!(
            ConfirmationError::Cancelled.to_string(),
            "Confirmation cancelled"
        );
        assert_eq!(
            ConfirmationError::IoError("closed".to_string()).to_string(),
            "I/O error: closed"
        );
    }
}
