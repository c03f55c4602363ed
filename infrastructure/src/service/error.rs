//! Error types for the HTTP adapter

use crate::config::ConfigValidationError;
use thiserror::Error;

/// Errors that can occur while setting up the HTTP client
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Invalid service configuration: {0}")]
    InvalidConfig(#[from] ConfigValidationError),
}
