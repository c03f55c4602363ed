//! CLI entrypoint for ragchat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use ragchat_application::{
    AutoApproveConfirmation, ConfirmationPort, ConversationLogger, ConversationSession,
    NoConversationLogger, ProjectDirectory, RoundOutcome,
};
use ragchat_infrastructure::{ConfigLoader, FileConfig, HttpRagGateway, JsonlConversationLogger};
use ragchat_presentation::{
    ChatRepl, Cli, Command, ConsoleFormatter, InteractiveConfirmation, OutputFormat, ProjectsRunner,
    ReplConfig, progress_for_terminal,
};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_tracing(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = load_config(&cli)?;
    info!("Starting ragchat against {}", config.service.base_url);

    // === Dependency Injection ===
    let gateway = Arc::new(HttpRagGateway::from_config(&config)?);

    let conversation_logger: Arc<dyn ConversationLogger> = match &config.logging.conversation_log
    {
        Some(path) => match JsonlConversationLogger::open(path) {
            Some(logger) => {
                info!("Conversation log: {}", logger.path().display());
                Arc::new(logger)
            }
            None => Arc::new(NoConversationLogger),
        },
        None => Arc::new(NoConversationLogger),
    };

    let confirmation: Arc<dyn ConfirmationPort> = if cli.yes {
        Arc::new(AutoApproveConfirmation)
    } else {
        Arc::new(InteractiveConfirmation::new())
    };

    let session = ConversationSession::new(gateway.clone())
        .with_conversation_logger(conversation_logger.clone());
    let mut directory = ProjectDirectory::new(gateway, confirmation)
        .with_conversation_logger(conversation_logger);

    let show_progress = !cli.quiet && config.repl.show_progress;

    match cli.command_or_default() {
        Command::Chat { project } => {
            let mut repl = ChatRepl::new(session, directory)
                .with_config(ReplConfig::new(show_progress, config.repl.history_path()))
                .with_project(project);
            repl.run().await?;
        }
        Command::Ask { project, question } => {
            let show_progress = show_progress && cli.output == OutputFormat::Text;
            run_ask(
                session,
                &mut directory,
                project,
                &question,
                cli.output,
                show_progress,
            )
            .await?;
        }
        Command::Projects(command) => {
            let output = ProjectsRunner::run(&mut directory, &command, cli.output).await?;
            println!("{}", output);
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level
///
/// With `--log-file` the diagnostics go to the file, leaving the terminal to
/// the chat itself.
fn init_tracing(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

/// Merge configuration sources and apply command-line overrides
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    if let Some(base_url) = &cli.base_url {
        config.service.base_url = base_url.clone();
        config.validate()?;
    }

    Ok(config)
}

/// Ask a single question and print the answer
async fn run_ask(
    mut session: ConversationSession,
    directory: &mut ProjectDirectory,
    project: Option<String>,
    question: &str,
    format: OutputFormat,
    show_progress: bool,
) -> Result<()> {
    let Some(project) = project else {
        bail!("A project is required. Use --project <name>.");
    };
    let listed = ProjectsRunner::is_listed(directory, &project)
        .await
        .context("Failed to load projects")?;
    if !listed {
        bail!("Unknown project: {} (see `ragchat projects list`)", project);
    }
    session.select_project(project.as_str());

    let progress = progress_for_terminal(show_progress);
    match session.send_question(question, progress.as_ref()).await? {
        RoundOutcome::Answered { .. } => {
            let Some(answer) = session.transcript().last() else {
                bail!("The answer was not recorded");
            };
            let output = match format {
                OutputFormat::Text => ConsoleFormatter::format_message(answer),
                OutputFormat::Json => ConsoleFormatter::format_answer_json(&project, question, answer),
            };
            println!("{}", output);
            Ok(())
        }
        RoundOutcome::Failed(e) => bail!("Failed to get an answer: {}", e),
    }
}
