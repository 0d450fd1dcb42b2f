//! Progress notification port
//!
//! Defines the interface for reporting progress while a debate runs.

use debate_domain::{DebateRound, DebateSession, Stance};

/// Callback for progress updates during debate orchestration
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain text, etc.)
pub trait DebateProgressNotifier: Send + Sync {
    /// Called once the request is validated, before any worker call
    fn on_session_start(&self, topic: &str, rounds: u32);

    /// Called when a round starts
    fn on_round_start(&self, round: u32);

    /// Called when a worker call resolves
    fn on_argument(&self, round: u32, stance: Stance, success: bool);

    /// Called when both arguments of a round are recorded
    fn on_round_complete(&self, _round: &DebateRound) {}

    /// Called with the final session, completed or failed
    fn on_session_end(&self, _session: &DebateSession) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl DebateProgressNotifier for NoProgress {
    fn on_session_start(&self, _topic: &str, _rounds: u32) {}
    fn on_round_start(&self, _round: u32) {}
    fn on_argument(&self, _round: u32, _stance: Stance, _success: bool) {}
}
