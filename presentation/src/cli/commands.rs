//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable output
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for ragchat
#[derive(Parser, Debug)]
#[command(name = "ragchat")]
#[command(author, version, about = "Chat client for a retrieval-augmented QA service")]
#[command(long_about = r#"
ragchat asks questions against a document-backed QA service. Every question
is scoped to one project, which binds a name to a document source.

Without a subcommand, ragchat starts the interactive chat.

Configuration files are loaded from (in priority order):
1. --config <path>                   Explicit config file
2. ./ragchat.toml or ./.ragchat.toml Project-level config
3. ~/.config/ragchat/config.toml     Global config

Environment variables prefixed with RAGCHAT_ override file settings,
using "__" as the section separator (e.g. RAGCHAT_SERVICE__BASE_URL).

Example:
  ragchat chat --project handbook
  ragchat ask --project handbook "How many vacation days do I get?"
  ragchat projects register handbook https://example.sharepoint.com/sites/hr
  ragchat projects delete handbook
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Base URL of the QA service (overrides configuration)
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Output format for one-shot commands
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub output: OutputFormat,

    /// Answer yes to delete confirmations
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// The subcommand to run, defaulting to interactive chat
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Chat { project: None })
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Start the interactive chat (default)
    Chat {
        /// Project to select on startup
        #[arg(short, long, value_name = "NAME")]
        project: Option<String>,
    },

    /// Ask a single question and print the answer
    Ask {
        /// Project the question is scoped to
        #[arg(short, long, value_name = "NAME")]
        project: Option<String>,

        /// The question to ask
        question: String,
    },

    /// Manage registered projects
    #[command(subcommand)]
    Projects(ProjectsCommand),
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ProjectsCommand {
    /// List registered projects
    List,

    /// Register a project with its document source
    Register {
        /// Project name
        name: String,
        /// Document source URL
        source_url: String,
    },

    /// Delete a project after confirmation
    Delete {
        /// Project name
        name: String,
    },
}
