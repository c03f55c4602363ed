//! Console output formatter

use colored::Colorize;
use ragchat_domain::{ChatSession, Message, Project, Role, SourceDocument};
use serde_json::json;

/// Formats transcripts, projects and saved sessions for the console
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a single transcript message
    ///
    /// Answers carry their citation block when the service named a source
    /// document.
    pub fn format_message(message: &Message) -> String {
        let mut output = String::new();

        match message.role() {
            Role::Question => {
                output.push_str(&format!("{} {}\n", "You:".cyan().bold(), message.text()));
            }
            Role::Answer => {
                output.push_str(&format!("{}\n", "Answer:".green().bold()));
                output.push_str(&Self::indent(message.text(), "  "));
                output.push('\n');
                if let Some(doc) = message.source_document() {
                    output.push_str(&Self::format_source_document(doc));
                }
            }
        }

        output
    }

    /// Format the citation block of an answer
    pub fn format_source_document(doc: &SourceDocument) -> String {
        let mut output = String::new();
        output.push_str(&format!("\n  {}\n", "Source".dimmed().bold()));
        if !doc.name.is_empty() {
            output.push_str(&format!("    {} {}\n", "File:".dimmed(), doc.name));
        }
        if !doc.last_modified.is_empty() {
            output.push_str(&format!(
                "    {} {}\n",
                "Last modified:".dimmed(),
                doc.last_modified
            ));
        }
        if !doc.url.is_empty() {
            output.push_str(&format!("    {} {}\n", "URL:".dimmed(), doc.url.underline()));
        }
        output
    }

    /// Format a whole transcript, one message per block
    pub fn format_transcript(messages: &[Message]) -> String {
        if messages.is_empty() {
            return format!("{}\n", "(empty conversation)".dimmed());
        }

        messages
            .iter()
            .map(Self::format_message)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format the saved-session list, most recent last
    pub fn format_history(history: &[ChatSession]) -> String {
        if history.is_empty() {
            return format!("{}\n", "No saved conversations yet.".dimmed());
        }

        let mut output = Self::section_header("Saved conversations");
        for session in history {
            output.push_str(&format!(
                "  {} {} {}\n",
                format!("#{:<3}", session.id()).cyan(),
                session.title(),
                format!("({} messages)", session.messages().len()).dimmed()
            ));
        }
        output
    }

    /// Format the project list, marking the selected one
    pub fn format_projects(projects: &[Project], selected: Option<&str>) -> String {
        if projects.is_empty() {
            return format!("{}\n", "No projects registered.".dimmed());
        }

        let mut output = Self::section_header("Projects");
        for project in projects {
            let marker = if selected == Some(project.name()) {
                "*".green().bold()
            } else {
                " ".normal()
            };
            let source = project.source_url().unwrap_or("-");
            output.push_str(&format!(
                " {} {:<24} {}\n",
                marker,
                project.name().bold(),
                source.dimmed()
            ));
        }
        output
    }

    /// Format an answer as JSON
    pub fn format_answer_json(project: &str, question: &str, answer: &Message) -> String {
        let value = json!({
            "project": project,
            "question": question,
            "answer": answer.text(),
            "source_document": answer.source_document(),
        });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the project list as JSON
    pub fn format_projects_json(projects: &[Project]) -> String {
        serde_json::to_string_pretty(projects).unwrap_or_else(|_| "[]".to_string())
    }

    /// Welcome banner for the chat REPL
    pub fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
