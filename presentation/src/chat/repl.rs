//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::cli::commands::OutputFormat;
use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::progress_for_terminal;
use crate::projects::ProjectsRunner;
use colored::Colorize;
use ragchat_application::{ConversationSession, ProjectDirectory, RoundOutcome, SessionError};
use ragchat_domain::{ProjectDraft, ValidationError};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use tracing::debug;

/// A parsed line of REPL input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Quit,
    /// Refresh and show the project list
    Projects,
    /// Select a project, or show the current one
    Project(Option<String>),
    /// Register a project; missing fields are prompted for
    Register {
        name: Option<String>,
        source_url: Option<String>,
    },
    Delete(String),
    History,
    Open(u32),
    New,
    Show,
    Question(String),
    Usage(&'static str),
    Unknown(String),
}

impl ReplCommand {
    /// Parse one trimmed, non-empty input line
    pub fn parse(line: &str) -> Self {
        if !line.starts_with('/') {
            return ReplCommand::Question(line.to_string());
        }

        let mut parts = line.splitn(2, char::is_whitespace);
        let cmd = parts.next().unwrap_or_default();
        let args = parts.next().map(str::trim).filter(|a| !a.is_empty());

        match cmd {
            "/quit" | "/exit" | "/q" => ReplCommand::Quit,
            "/help" | "/h" | "/?" => ReplCommand::Help,
            "/projects" | "/ls" => ReplCommand::Projects,
            "/project" | "/p" => ReplCommand::Project(args.map(str::to_string)),
            // the URL is the last word; the name may contain spaces
            "/register" => match args.map(|a| a.rsplit_once(char::is_whitespace)) {
                Some(Some((name, url))) => ReplCommand::Register {
                    name: Some(name.trim_end().to_string()),
                    source_url: Some(url.to_string()),
                },
                Some(None) => ReplCommand::Register {
                    name: args.map(str::to_string),
                    source_url: None,
                },
                None => ReplCommand::Register {
                    name: None,
                    source_url: None,
                },
            },
            "/delete" => match args {
                Some(name) => ReplCommand::Delete(name.to_string()),
                None => ReplCommand::Usage("/delete <project>"),
            },
            "/history" => ReplCommand::History,
            "/open" => match args.and_then(|a| a.parse().ok()) {
                Some(id) => ReplCommand::Open(id),
                None => ReplCommand::Usage("/open <conversation number>"),
            },
            "/new" => ReplCommand::New,
            "/show" => ReplCommand::Show,
            _ => ReplCommand::Unknown(cmd.to_string()),
        }
    }
}

/// Interactive chat REPL
pub struct ChatRepl {
    session: ConversationSession,
    directory: ProjectDirectory,
    config: ReplConfig,
    draft: ProjectDraft,
    initial_project: Option<String>,
}

impl ChatRepl {
    /// Create a new ChatRepl
    pub fn new(session: ConversationSession, directory: ProjectDirectory) -> Self {
        Self {
            session,
            directory,
            config: ReplConfig::new(true, None),
            draft: ProjectDraft::default(),
            initial_project: None,
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Select this project once the project list has loaded
    pub fn with_project(mut self, project: Option<String>) -> Self {
        self.initial_project = project;
        self
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_path.clone();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();
        self.load_projects().await;

        loop {
            let readline = rl.readline(&self.prompt());

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if self.handle(ReplCommand::parse(line), &mut rl).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn prompt(&self) -> String {
        match self.session.selected_project() {
            Some(project) => format!("{}> ", project),
            None => "ragchat> ".to_string(),
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", ConsoleFormatter::header("ragchat"));
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Type a question to ask it in the selected project.");
        println!();
        println!("Commands:");
        println!("  /projects             - Refresh and list projects");
        println!("  /project [name]       - Select a project (or show the current one)");
        println!("  /register [name url]  - Register a project");
        println!("  /delete <name>        - Delete a project");
        println!("  /history              - List saved conversations");
        println!("  /open <number>        - Reopen a saved conversation");
        println!("  /show                 - Show the current conversation");
        println!("  /new                  - Start a new conversation");
        println!("  /help, /h, /?         - Show this help");
        println!("  /quit, /exit, /q      - Exit chat");
        println!();
    }

    /// Initial project listing, then apply the startup selection
    async fn load_projects(&mut self) {
        if let Err(e) = self.directory.list_projects().await {
            eprintln!("{} {}", "Could not load projects:".yellow(), e);
        }

        match self.initial_project.take() {
            Some(name) => self.select_project(&name).await,
            None => {
                let names = self.directory.project_names();
                if !names.is_empty() {
                    println!("{} {}", "Projects:".dimmed(), names.join(", "));
                    println!("Select one with {}", "/project <name>".cyan());
                }
            }
        }
        println!();
    }

    /// Handle one input line. Returns true if the REPL should exit.
    async fn handle(&mut self, command: ReplCommand, rl: &mut DefaultEditor) -> bool {
        debug!("REPL command: {:?}", command);

        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => {
                println!();
                Self::print_help();
            }
            ReplCommand::Projects => {
                let selected = self.session.selected_project().map(str::to_string);
                match ProjectsRunner::list(
                    &mut self.directory,
                    selected.as_deref(),
                    OutputFormat::Text,
                )
                .await
                {
                    Ok(output) => println!("{}", output),
                    Err(e) => {
                        eprintln!("{} {}", "Could not refresh projects:".yellow(), e);
                        println!(
                            "{}",
                            ConsoleFormatter::format_projects(
                                self.directory.projects(),
                                selected.as_deref()
                            )
                        );
                    }
                }
            }
            ReplCommand::Project(Some(name)) => self.select_project(&name).await,
            ReplCommand::Project(None) => match self.session.selected_project() {
                Some(project) => println!("Current project: {}", project.bold()),
                None => println!("No project selected. Use {}", "/project <name>".cyan()),
            },
            ReplCommand::Register { name, source_url } => {
                if self.fill_draft(name, source_url, rl) {
                    match ProjectsRunner::register(
                        &mut self.directory,
                        &mut self.draft,
                        OutputFormat::Text,
                    )
                    .await
                    {
                        Ok(output) => println!("{}", output),
                        Err(e) => eprintln!("{} {}", "Registration failed:".red(), e),
                    }
                }
            }
            ReplCommand::Delete(name) => {
                match ProjectsRunner::delete(&mut self.directory, &name).await {
                    Ok(output) => {
                        println!("{}", output);
                        if self.session.selected_project() == Some(name.as_str())
                            && !self.directory.contains(&name)
                        {
                            self.session.select_project("");
                        }
                    }
                    Err(e) => eprintln!("{} {}", "Deletion failed:".red(), e),
                }
            }
            ReplCommand::History => {
                println!("{}", ConsoleFormatter::format_history(self.session.history()));
            }
            ReplCommand::Open(id) => match self.session.select_history_session(id) {
                Ok(()) => {
                    println!();
                    println!("{}", ConsoleFormatter::format_transcript(self.session.transcript()));
                }
                Err(e) => eprintln!("{}", e),
            },
            ReplCommand::New => {
                self.session.new_conversation();
                println!("Started a new conversation.");
            }
            ReplCommand::Show => {
                println!("{}", ConsoleFormatter::format_transcript(self.session.transcript()));
            }
            ReplCommand::Question(text) => self.process_question(&text).await,
            ReplCommand::Usage(usage) => println!("Usage: {}", usage),
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }

        false
    }

    /// Select a project offered by the directory
    async fn select_project(&mut self, name: &str) {
        let listed = match ProjectsRunner::is_listed(&mut self.directory, name).await {
            Ok(listed) => listed,
            Err(_) => self.directory.contains(name),
        };

        if listed {
            self.session.select_project(name);
            println!("Selected project {}", name.bold());
        } else {
            println!(
                "{} {} (see {})",
                "Unknown project:".yellow(),
                name,
                "/projects".cyan()
            );
        }
    }

    /// Fill the registration draft, prompting for missing fields.
    ///
    /// Prompts are pre-filled with the draft left by a failed attempt.
    /// Returns false when a prompt was abandoned; the draft is kept.
    fn fill_draft(
        &mut self,
        name: Option<String>,
        source_url: Option<String>,
        rl: &mut DefaultEditor,
    ) -> bool {
        match name {
            Some(name) => self.draft.name = name,
            None => match rl.readline_with_initial("Project name: ", (self.draft.name.as_str(), ""))
            {
                Ok(line) => self.draft.name = line.trim().to_string(),
                Err(_) => return false,
            },
        }

        match source_url {
            Some(url) => self.draft.source_url = url,
            None => match rl
                .readline_with_initial("Source URL: ", (self.draft.source_url.as_str(), ""))
            {
                Ok(line) => self.draft.source_url = line.trim().to_string(),
                Err(_) => return false,
            },
        }

        true
    }

    async fn process_question(&mut self, question: &str) {
        println!();

        let progress = progress_for_terminal(self.config.show_progress);
        match self.session.send_question(question, progress.as_ref()).await {
            Ok(RoundOutcome::Answered { .. }) => {
                if let Some(answer) = self.session.transcript().last() {
                    println!("{}", ConsoleFormatter::format_message(answer));
                }
            }
            Ok(RoundOutcome::Failed(e)) => {
                eprintln!("{} {}", "Failed to get an answer:".red(), e);
            }
            Err(SessionError::Validation(ValidationError::NoProjectSelected)) => {
                println!(
                    "{} Use {}",
                    "Select a project first.".yellow(),
                    "/project <name>".cyan()
                );
            }
            Err(e) => eprintln!("{}", e),
        }
    }
}
