//! Progress reporting for debate execution

use colored::Colorize;
use debate_application::DebateProgressNotifier;
use debate_domain::{DebateSession, Stance};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress with a bar counting arguments (two per round)
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.bar.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DebateProgressNotifier for ProgressReporter {
    fn on_session_start(&self, _topic: &str, rounds: u32) {
        let pb = ProgressBar::new(u64::from(rounds) * Stance::ORDER.len() as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix("Round 1");
        pb.set_message("Starting...");

        if let Ok(mut guard) = self.bar.lock() {
            *guard = Some(pb);
        }
    }

    fn on_round_start(&self, round: u32) {
        self.with_bar(|pb| pb.set_prefix(format!("Round {}", round)));
    }

    fn on_argument(&self, _round: u32, stance: Stance, success: bool) {
        self.with_bar(|pb| {
            let status = if success {
                format!("{} {}", "v".green(), stance.display_name())
            } else {
                format!("{} {}", "x".red(), stance.display_name())
            };
            pb.set_message(status);
            if success {
                pb.inc(1);
            }
        });
    }

    fn on_session_end(&self, session: &DebateSession) {
        let taken = self.bar.lock().ok().and_then(|mut guard| guard.take());
        if let Some(pb) = taken {
            if session.is_completed() {
                pb.finish_with_message(format!("{}", "Debate complete!".green()));
            } else {
                pb.abandon_with_message(format!("{}", "Debate failed".red()));
            }
        }
    }
}

/// Simple line-based progress for non-interactive stderr
pub struct SimpleProgress;

impl DebateProgressNotifier for SimpleProgress {
    fn on_session_start(&self, topic: &str, rounds: u32) {
        eprintln!(
            "{} {} ({} rounds)",
            "->".cyan(),
            debate_domain::string::preview(topic, 60).as_str().bold(),
            rounds
        );
    }

    fn on_round_start(&self, round: u32) {
        eprintln!("{} Round {}", "->".cyan(), round);
    }

    fn on_argument(&self, _round: u32, stance: Stance, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), stance.display_name());
        } else {
            eprintln!("  {} {} (failed)", "x".red(), stance.display_name());
        }
    }

    fn on_session_end(&self, session: &DebateSession) {
        eprintln!(
            "{} {} round(s) completed, status: {}",
            "->".cyan(),
            session.completed_rounds(),
            session.status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debate_domain::{DebateRound, DebateStatus};

    fn completed_session() -> DebateSession {
        DebateSession {
            topic: "t".to_string(),
            original_context: String::new(),
            requested_rounds: 1,
            rounds: vec![DebateRound::new(1, "p", "c")],
            status: DebateStatus::Completed,
            error: None,
        }
    }

    #[test]
    fn test_reporter_counts_arguments() {
        let reporter = ProgressReporter::new();
        reporter.on_session_start("t", 2);
        reporter.on_round_start(1);
        reporter.on_argument(1, Stance::Supporting, true);
        reporter.on_argument(1, Stance::Opposing, true);

        {
            let guard = reporter.bar.lock().unwrap();
            let pb = guard.as_ref().unwrap();
            assert_eq!(pb.length(), Some(4));
            assert_eq!(pb.position(), 2);
            assert_eq!(pb.prefix(), "Round 1");
        }

        reporter.on_session_end(&completed_session());
        assert!(reporter.bar.lock().unwrap().is_none());
    }

    #[test]
    fn test_failed_argument_does_not_advance() {
        let reporter = ProgressReporter::new();
        reporter.on_session_start("t", 1);
        reporter.on_argument(1, Stance::Supporting, false);

        let guard = reporter.bar.lock().unwrap();
        assert_eq!(guard.as_ref().unwrap().position(), 0);
    }

    #[test]
    fn test_events_before_start_are_ignored() {
        let reporter = ProgressReporter::default();
        reporter.on_round_start(1);
        reporter.on_argument(1, Stance::Opposing, true);
        reporter.on_session_end(&completed_session());
    }
}
