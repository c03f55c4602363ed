//! Domain error types

use thiserror::Error;

/// Input rejected before any network call is issued.
///
/// Every variant leaves the owning manager's state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No project selected")]
    NoProjectSelected,

    #[error("Project name is required")]
    MissingProjectName,

    #[error("Source URL is required")]
    MissingSourceUrl,
}
