//! Progress notification port
//!
//! Defines the interface for reporting question/answer rounds while a
//! response is being generated.

use super::error::GatewayError;
use ragchat_domain::Message;

/// Callback for round progress
///
/// Implementations live in the presentation layer and can show a spinner,
/// a status line, or nothing at all.
pub trait SessionProgress: Send + Sync {
    /// Called right after the generation lock is taken
    fn on_generation_start(&self, project: &str);

    /// Called when the round is over, whatever its outcome
    fn on_generation_end(&self, answered: bool);

    /// Called with the answer before it is appended to the transcript
    fn on_answer_received(&self, _answer: &Message) {}

    /// Called when the round failed and no answer will be appended
    fn on_round_failed(&self, _error: &GatewayError) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoSessionProgress;

impl SessionProgress for NoSessionProgress {
    fn on_generation_start(&self, _project: &str) {}
    fn on_generation_end(&self, _answered: bool) {}
}
