//! Progress reporting while an answer is being generated

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use ragchat_application::{GatewayError, NoSessionProgress, SessionProgress};
use std::io::IsTerminal;
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner for the duration of a question round
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} {elapsed:.dim}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn take_spinner(&self) -> Option<ProgressBar> {
        self.spinner.lock().ok().and_then(|mut slot| slot.take())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionProgress for ProgressReporter {
    fn on_generation_start(&self, project: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("Generating answer from {}...", project.cyan()));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_generation_end(&self, _answered: bool) {
        if let Some(pb) = self.take_spinner() {
            pb.finish_and_clear();
        }
    }

    fn on_round_failed(&self, _error: &GatewayError) {
        // the caller reports the failure itself
        if let Some(pb) = self.take_spinner() {
            pb.finish_and_clear();
        }
    }
}

/// Plain-text progress for terminals without spinner support
pub struct SimpleProgress;

impl SimpleProgress {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionProgress for SimpleProgress {
    fn on_generation_start(&self, project: &str) {
        eprintln!("-> Generating answer from {}...", project);
    }

    fn on_generation_end(&self, answered: bool) {
        if answered {
            eprintln!("   {}", "Done".green());
        }
    }
}

/// Pick the progress display for the current stderr.
///
/// Spinners need a terminal; redirected output gets plain lines instead.
pub fn progress_for_terminal(show_progress: bool) -> Box<dyn SessionProgress> {
    if !show_progress {
        Box::new(NoSessionProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress::new())
    }
}
