//! Project registry port
//!
//! Defines the list/register/delete surface of the project registry.

use super::error::GatewayError;
use async_trait::async_trait;
use ragchat_domain::Project;

/// What the registry echoed back after a registration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisteredProject {
    pub name: Option<String>,
    pub source_url: Option<String>,
}

/// Registry of projects known to the QA service
#[async_trait]
pub trait ProjectRegistry: Send + Sync {
    /// Fetch every project.
    ///
    /// Entries without a usable name are dropped by the adapter.
    async fn list_projects(&self) -> Result<Vec<Project>, GatewayError>;

    /// Register a new project bound to `source_url`
    async fn register_project(
        &self,
        name: &str,
        source_url: &str,
    ) -> Result<RegisteredProject, GatewayError>;

    /// Remove a project by name
    async fn delete_project(&self, name: &str) -> Result<(), GatewayError>;
}
