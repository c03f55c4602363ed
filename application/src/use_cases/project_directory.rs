//! Project Directory Client.
//!
//! Mirrors the remote project registry into a local list. Every operation is
//! a single request; the local list changes only after the registry accepted
//! the change, so a failed call leaves it exactly as it was.

use crate::ports::confirmation::{ConfirmationError, ConfirmationPort};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, EventKind, NoConversationLogger,
};
use crate::ports::error::GatewayError;
use crate::ports::project_registry::ProjectRegistry;
use ragchat_domain::{Project, ProjectDraft, ValidationError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors returned by [`ProjectDirectory`] operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Registry error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Confirmation failed: {0}")]
    Confirmation(ConfirmationError),
}

/// Result of a delete request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The user declined; nothing was sent
    Declined,
}

/// Local mirror of the project registry
pub struct ProjectDirectory {
    registry: Arc<dyn ProjectRegistry>,
    confirmation: Arc<dyn ConfirmationPort>,
    conversation_logger: Arc<dyn ConversationLogger>,
    projects: Vec<Project>,
    loaded: bool,
}

impl ProjectDirectory {
    pub fn new(registry: Arc<dyn ProjectRegistry>, confirmation: Arc<dyn ConfirmationPort>) -> Self {
        Self {
            registry,
            confirmation,
            conversation_logger: Arc::new(NoConversationLogger),
            projects: Vec::new(),
            loaded: false,
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Names offered to the project selector
    pub fn project_names(&self) -> Vec<&str> {
        self.projects.iter().map(Project::name).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.projects.iter().any(|p| p.name() == name)
    }

    /// Whether a listing has completed at least once (successfully or not)
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Refresh the local list from the registry.
    ///
    /// On failure the previous list is kept and the error is returned for an
    /// optional notice; it has already been logged.
    pub async fn list_projects(&mut self) -> Result<&[Project], DirectoryError> {
        let result = self.registry.list_projects().await;
        self.loaded = true;

        match result {
            Ok(projects) => {
                info!("Fetched {} projects", projects.len());
                self.projects = projects;
                Ok(self.projects.as_slice())
            }
            Err(e) => {
                warn!("Failed to fetch the project list: {}", e);
                Err(e.into())
            }
        }
    }

    /// Register a project.
    ///
    /// Both fields must be non-empty; otherwise nothing is sent. The local
    /// entry uses the name echoed by the registry (falling back to the
    /// submitted one) and the submitted URL.
    pub async fn register_project(
        &mut self,
        name: &str,
        source_url: &str,
    ) -> Result<Project, DirectoryError> {
        let draft = ProjectDraft::new(name, source_url);
        let (name, source_url) = draft.validate()?;

        let registered = match self.registry.register_project(name, source_url).await {
            Ok(registered) => registered,
            Err(e) => {
                warn!("Failed to register project {}: {}", name, e);
                return Err(e.into());
            }
        };

        let stored_name = registered
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| name.to_string());
        let project = Project::try_new(stored_name, Some(source_url.to_string()))
            .ok_or(ValidationError::MissingProjectName)?;

        match self.projects.iter_mut().find(|p| p.name() == project.name()) {
            Some(existing) => *existing = project.clone(),
            None => self.projects.push(project.clone()),
        }

        info!("Registered project {}", project.name());
        self.conversation_logger.log(ConversationEvent::new(
            EventKind::ProjectRegistered,
            serde_json::json!({
                "project": project.name(),
                "source_url": source_url,
            }),
        ));
        Ok(project)
    }

    /// Register the draft's values, clearing the draft only on success
    pub async fn submit_registration(
        &mut self,
        draft: &mut ProjectDraft,
    ) -> Result<Project, DirectoryError> {
        let project = self
            .register_project(&draft.name, &draft.source_url)
            .await?;
        draft.clear();
        Ok(project)
    }

    /// Delete a project after explicit confirmation.
    ///
    /// A declined or cancelled prompt sends nothing.
    pub async fn delete_project(&mut self, name: &str) -> Result<DeleteOutcome, DirectoryError> {
        let prompt = format!("Delete project '{}'? This cannot be undone.", name);
        let confirmed = match self.confirmation.confirm(&prompt).await {
            Ok(confirmed) => confirmed,
            Err(ConfirmationError::Cancelled) => false,
            Err(e) => return Err(DirectoryError::Confirmation(e)),
        };
        if !confirmed {
            info!("Deletion of project {} declined", name);
            return Ok(DeleteOutcome::Declined);
        }

        if let Err(e) = self.registry.delete_project(name).await {
            warn!("Failed to delete project {}: {}", name, e);
            return Err(e.into());
        }

        self.projects.retain(|p| p.name() != name);
        info!("Deleted project {}", name);
        self.conversation_logger.log(ConversationEvent::new(
            EventKind::ProjectDeleted,
            serde_json::json!({ "project": name }),
        ));
        Ok(DeleteOutcome::Deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::confirmation::{AutoApproveConfirmation, AutoRejectConfirmation};
    use crate::ports::project_registry::RegisteredProject;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockRegistry {
        listings: Mutex<VecDeque<Result<Vec<Project>, GatewayError>>>,
        registrations: Mutex<VecDeque<Result<RegisteredProject, GatewayError>>>,
        deletions: Mutex<VecDeque<Result<(), GatewayError>>>,
        calls: Mutex<Vec<String>>,
    }

    impl MockRegistry {
        fn with_listing(self, listing: Result<Vec<Project>, GatewayError>) -> Self {
            self.listings.lock().unwrap().push_back(listing);
            self
        }

        fn with_registration(self, result: Result<RegisteredProject, GatewayError>) -> Self {
            self.registrations.lock().unwrap().push_back(result);
            self
        }

        fn with_deletion(self, result: Result<(), GatewayError>) -> Self {
            self.deletions.lock().unwrap().push_back(result);
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    fn exhausted() -> GatewayError {
        GatewayError::Network("No more responses".to_string())
    }

    #[async_trait]
    impl ProjectRegistry for MockRegistry {
        async fn list_projects(&self) -> Result<Vec<Project>, GatewayError> {
            self.calls.lock().unwrap().push("list".to_string());
            self.listings
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(exhausted()))
        }

        async fn register_project(
            &self,
            name: &str,
            source_url: &str,
        ) -> Result<RegisteredProject, GatewayError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("register:{}:{}", name, source_url));
            self.registrations
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(exhausted()))
        }

        async fn delete_project(&self, name: &str) -> Result<(), GatewayError> {
            self.calls.lock().unwrap().push(format!("delete:{}", name));
            self.deletions
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(exhausted()))
        }
    }

    struct CancellingConfirmation;

    #[async_trait]
    impl ConfirmationPort for CancellingConfirmation {
        async fn confirm(&self, _prompt: &str) -> Result<bool, ConfirmationError> {
            Err(ConfirmationError::Cancelled)
        }
    }

    fn project(name: &str, url: &str) -> Project {
        Project::try_new(name, Some(url.to_string())).unwrap()
    }

    fn server_error() -> GatewayError {
        GatewayError::Server {
            status: 500,
            body: "boom".to_string(),
        }
    }

    async fn loaded_directory(
        registry: MockRegistry,
        confirmation: Arc<dyn ConfirmationPort>,
    ) -> (ProjectDirectory, Arc<MockRegistry>) {
        let registry = Arc::new(registry.with_listing(Ok(vec![
            project("Alpha", "http://a"),
            project("Beta", "http://b"),
        ])));
        let mut directory = ProjectDirectory::new(registry.clone(), confirmation);
        directory.list_projects().await.unwrap();
        (directory, registry)
    }

    // ==================== Listing ====================

    #[tokio::test]
    async fn test_list_replaces_local_list() {
        let (directory, _) =
            loaded_directory(MockRegistry::default(), Arc::new(AutoRejectConfirmation)).await;

        assert!(directory.is_loaded());
        assert_eq!(directory.project_names(), vec!["Alpha", "Beta"]);
        assert!(directory.contains("Beta"));
    }

    #[tokio::test]
    async fn test_list_failure_keeps_previous_list() {
        let registry = MockRegistry::default();
        let (mut directory, _) = loaded_directory(registry, Arc::new(AutoRejectConfirmation)).await;

        // The mock has no second listing queued
        let result = directory.list_projects().await;

        assert!(matches!(result, Err(DirectoryError::Gateway(_))));
        assert_eq!(directory.project_names(), vec!["Alpha", "Beta"]);
    }

    #[tokio::test]
    async fn test_first_list_failure_leaves_empty_but_loaded() {
        let registry = Arc::new(MockRegistry::default().with_listing(Err(server_error())));
        let mut directory = ProjectDirectory::new(registry, Arc::new(AutoRejectConfirmation));

        assert!(!directory.is_loaded());
        assert!(directory.list_projects().await.is_err());
        assert!(directory.is_loaded());
        assert!(directory.projects().is_empty());
    }

    // ==================== Registration ====================

    #[tokio::test]
    async fn test_register_requires_name() {
        let (mut directory, registry) =
            loaded_directory(MockRegistry::default(), Arc::new(AutoRejectConfirmation)).await;

        let result = directory.register_project("", "http://x").await;

        assert_eq!(
            result,
            Err(DirectoryError::Validation(ValidationError::MissingProjectName))
        );
        assert_eq!(registry.calls(), vec!["list"]);
        assert_eq!(directory.projects().len(), 2);
    }

    #[tokio::test]
    async fn test_register_requires_source_url() {
        let (mut directory, registry) =
            loaded_directory(MockRegistry::default(), Arc::new(AutoRejectConfirmation)).await;

        let result = directory.register_project("Gamma", "").await;

        assert_eq!(
            result,
            Err(DirectoryError::Validation(ValidationError::MissingSourceUrl))
        );
        assert_eq!(registry.calls(), vec!["list"]);
    }

    #[tokio::test]
    async fn test_register_appends_echoed_project() {
        let registry = MockRegistry::default().with_registration(Ok(RegisteredProject {
            name: Some("Gamma".to_string()),
            source_url: None,
        }));
        let (mut directory, registry) =
            loaded_directory(registry, Arc::new(AutoRejectConfirmation)).await;

        let registered = directory
            .register_project("Gamma", "http://g")
            .await
            .unwrap();

        assert_eq!(registered, project("Gamma", "http://g"));
        assert_eq!(directory.project_names(), vec!["Alpha", "Beta", "Gamma"]);
        assert_eq!(registry.calls(), vec!["list", "register:Gamma:http://g"]);
    }

    #[tokio::test]
    async fn test_register_falls_back_to_submitted_name() {
        let registry = MockRegistry::default().with_registration(Ok(RegisteredProject::default()));
        let (mut directory, _) = loaded_directory(registry, Arc::new(AutoRejectConfirmation)).await;

        let registered = directory
            .register_project(" Gamma ", "http://g")
            .await
            .unwrap();

        assert_eq!(registered.name(), "Gamma");
    }

    #[tokio::test]
    async fn test_register_existing_name_replaces_entry() {
        let registry = MockRegistry::default().with_registration(Ok(RegisteredProject {
            name: Some("Alpha".to_string()),
            source_url: None,
        }));
        let (mut directory, _) = loaded_directory(registry, Arc::new(AutoRejectConfirmation)).await;

        directory
            .register_project("Alpha", "http://new")
            .await
            .unwrap();

        assert_eq!(directory.projects().len(), 2);
        assert_eq!(directory.projects()[0].source_url(), Some("http://new"));
    }

    #[tokio::test]
    async fn test_submit_registration_clears_draft_on_success() {
        let registry = MockRegistry::default().with_registration(Ok(RegisteredProject::default()));
        let (mut directory, _) = loaded_directory(registry, Arc::new(AutoRejectConfirmation)).await;
        let mut draft = ProjectDraft::new("Gamma", "http://g");

        directory.submit_registration(&mut draft).await.unwrap();

        assert!(draft.is_empty());
        assert!(directory.contains("Gamma"));
    }

    #[tokio::test]
    async fn test_submit_registration_keeps_draft_on_failure() {
        let registry = MockRegistry::default().with_registration(Err(server_error()));
        let (mut directory, _) = loaded_directory(registry, Arc::new(AutoRejectConfirmation)).await;
        let mut draft = ProjectDraft::new("Gamma", "http://g");

        let result = directory.submit_registration(&mut draft).await;

        assert!(matches!(result, Err(DirectoryError::Gateway(_))));
        assert_eq!(draft, ProjectDraft::new("Gamma", "http://g"));
        assert_eq!(directory.projects().len(), 2);
    }

    // ==================== Deletion ====================

    #[tokio::test]
    async fn test_declined_delete_sends_nothing() {
        let (mut directory, registry) =
            loaded_directory(MockRegistry::default(), Arc::new(AutoRejectConfirmation)).await;

        let outcome = directory.delete_project("Alpha").await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Declined);
        assert_eq!(registry.calls(), vec!["list"]);
        assert_eq!(directory.projects().len(), 2);
    }

    #[tokio::test]
    async fn test_cancelled_prompt_counts_as_declined() {
        let (mut directory, registry) =
            loaded_directory(MockRegistry::default(), Arc::new(CancellingConfirmation)).await;

        let outcome = directory.delete_project("Alpha").await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Declined);
        assert_eq!(registry.calls(), vec!["list"]);
    }

    #[tokio::test]
    async fn test_confirmed_delete_removes_entry() {
        let registry = MockRegistry::default().with_deletion(Ok(()));
        let (mut directory, registry) =
            loaded_directory(registry, Arc::new(AutoApproveConfirmation)).await;

        let outcome = directory.delete_project("Alpha").await.unwrap();

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(directory.project_names(), vec!["Beta"]);
        assert_eq!(registry.calls(), vec!["list", "delete:Alpha"]);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_entry() {
        let registry = MockRegistry::default().with_deletion(Err(server_error()));
        let (mut directory, _) = loaded_directory(registry, Arc::new(AutoApproveConfirmation)).await;

        let result = directory.delete_project("Alpha").await;

        assert_eq!(result, Err(DirectoryError::Gateway(server_error())));
        assert_eq!(directory.project_names(), vec!["Alpha", "Beta"]);
    }
}
