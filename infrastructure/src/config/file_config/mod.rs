//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod logging;
mod repl;
mod service;

pub use logging::FileLoggingConfig;
pub use repl::FileReplConfig;
pub use service::{DEFAULT_BASE_URL, FileEndpointsConfig, FileServiceConfig};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("service.base_url must be an http(s) URL, got '{0}'")]
    InvalidBaseUrl(String),

    #[error("service.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("endpoints.{name} must start with '/', got '{value}'")]
    InvalidEndpoint { name: &'static str, value: String },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// QA service location
    pub service: FileServiceConfig,
    /// Endpoint paths relative to the base URL
    pub endpoints: FileEndpointsConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Conversation log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.service.validate()?;
        self.endpoints.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[service]
base_url = "http://localhost:7071"
timeout_seconds = 30

[endpoints]
register = "/register_project"

[repl]
show_progress = false
history_file = "~/.local/share/ragchat/history.txt"

[logging]
conversation_log = "/tmp/ragchat.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.service.base_url, "http://localhost:7071");
        assert_eq!(config.service.timeout_seconds, Some(30));
        assert_eq!(config.endpoints.register, "/register_project");
        // Unset endpoints keep their defaults
        assert_eq!(config.endpoints.answer, "/answer");
        assert!(!config.repl.show_progress);
        assert_eq!(
            config.logging.conversation_log.as_deref(),
            Some("/tmp/ragchat.jsonl")
        );
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.service.base_url, DEFAULT_BASE_URL);
        assert!(config.service.timeout_seconds.is_none());
        assert_eq!(config.endpoints.projects, "/projects");
        assert!(config.repl.show_progress);
        assert!(config.logging.conversation_log.is_none());
    }

    #[test]
    fn test_validate_default_config() {
        assert_eq!(FileConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_reports_bad_endpoint() {
        let mut config = FileConfig::default();
        config.endpoints.delete = "projects".to_string();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidEndpoint {
                name: "delete",
                value: "projects".to_string(),
            })
        );
    }
}
