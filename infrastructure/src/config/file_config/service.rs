//! Service configuration from TOML (`[service]` and `[endpoints]` sections)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};

/// Hosted QA service used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "https://func-rag.azurewebsites.net";

/// Raw service configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServiceConfig {
    /// Base URL of the QA service, without a trailing path
    pub base_url: String,
    /// Per-request timeout in seconds (unset = wait indefinitely)
    pub timeout_seconds: Option<u64>,
}

impl Default for FileServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
        }
    }
}

impl FileServiceConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let url = reqwest::Url::parse(&self.base_url)
            .map_err(|_| ConfigValidationError::InvalidBaseUrl(self.base_url.clone()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigValidationError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.timeout_seconds == Some(0) {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

/// Raw endpoint paths from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEndpointsConfig {
    /// GET: list projects
    pub projects: String,
    /// POST: register a project
    pub register: String,
    /// DELETE: remove a project
    pub delete: String,
    /// POST: ask a question
    pub answer: String,
}

impl Default for FileEndpointsConfig {
    fn default() -> Self {
        Self {
            projects: "/projects".to_string(),
            // The service exposes registration under this spelling
            register: "/resist_project".to_string(),
            delete: "/projects".to_string(),
            answer: "/answer".to_string(),
        }
    }
}

impl FileEndpointsConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let paths = [
            ("projects", &self.projects),
            ("register", &self.register),
            ("delete", &self.delete),
            ("answer", &self.answer),
        ];
        for (name, value) in paths {
            if !value.starts_with('/') {
                return Err(ConfigValidationError::InvalidEndpoint {
                    name,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }
}
