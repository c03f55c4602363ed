//! Project management commands shared by the CLI and the chat REPL.
//!
//! Each operation drives the [`ProjectDirectory`] and renders the result,
//! leaving printing to the caller.

use crate::cli::commands::{OutputFormat, ProjectsCommand};
use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use ragchat_application::{DeleteOutcome, DirectoryError, ProjectDirectory};
use ragchat_domain::ProjectDraft;

/// Runs project commands against a [`ProjectDirectory`]
pub struct ProjectsRunner;

impl ProjectsRunner {
    /// Run a `projects` subcommand and return what to print
    pub async fn run(
        directory: &mut ProjectDirectory,
        command: &ProjectsCommand,
        format: OutputFormat,
    ) -> Result<String, DirectoryError> {
        match command {
            ProjectsCommand::List => Self::list(directory, None, format).await,
            ProjectsCommand::Register { name, source_url } => {
                Self::register(directory, &mut ProjectDraft::new(name, source_url), format).await
            }
            ProjectsCommand::Delete { name } => Self::delete(directory, name).await,
        }
    }

    /// Refresh the project list and render it
    pub async fn list(
        directory: &mut ProjectDirectory,
        selected: Option<&str>,
        format: OutputFormat,
    ) -> Result<String, DirectoryError> {
        let projects = directory.list_projects().await?;
        Ok(match format {
            OutputFormat::Text => ConsoleFormatter::format_projects(projects, selected),
            OutputFormat::Json => ConsoleFormatter::format_projects_json(projects),
        })
    }

    /// Submit a registration draft; the draft is cleared only on success
    pub async fn register(
        directory: &mut ProjectDirectory,
        draft: &mut ProjectDraft,
        format: OutputFormat,
    ) -> Result<String, DirectoryError> {
        let project = directory.submit_registration(draft).await?;
        Ok(match format {
            OutputFormat::Text => format!(
                "{} {} ({})",
                "Registered project".green(),
                project.name().bold(),
                project.source_url().unwrap_or("-")
            ),
            OutputFormat::Json => ConsoleFormatter::format_projects_json(&[project]),
        })
    }

    /// Check that `name` is a listed project.
    ///
    /// Lists first when nothing has been fetched yet or the name is unknown,
    /// since the project may have been registered elsewhere.
    pub async fn is_listed(
        directory: &mut ProjectDirectory,
        name: &str,
    ) -> Result<bool, DirectoryError> {
        if !directory.is_loaded() || !directory.contains(name) {
            directory.list_projects().await?;
        }
        Ok(directory.contains(name))
    }

    /// Delete a project after the directory's confirmation prompt
    pub async fn delete(
        directory: &mut ProjectDirectory,
        name: &str,
    ) -> Result<String, DirectoryError> {
        Ok(match directory.delete_project(name).await? {
            DeleteOutcome::Deleted => format!("{} {}", "Deleted project".green(), name.bold()),
            DeleteOutcome::Declined => format!("{} {}", "Kept project".dimmed(), name),
        })
    }
}
