//! Infrastructure layer for ragchat
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: the HTTP client for the QA service, configuration
//! file loading and the JSONL conversation log.

pub mod config;
pub mod logging;
pub mod service;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, ConfigValidationError, FileConfig, FileEndpointsConfig,
    FileLoggingConfig, FileReplConfig, FileServiceConfig,
};
pub use logging::JsonlConversationLogger;
pub use service::{HttpRagGateway, ServiceError};
