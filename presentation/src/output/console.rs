//! Console output formatter for debate sessions

use colored::Colorize;
use debate_domain::{DebateSession, Stance};

/// Formats debate sessions for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete transcript
    pub fn format(session: &DebateSession) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Debate Transcript"));
        output.push('\n');

        output.push_str(&format!("{} {}\n", "Topic:".cyan().bold(), session.topic));
        if !session.original_context.is_empty() {
            output.push_str(&format!(
                "{}\n{}\n",
                "Context:".cyan().bold(),
                Self::indent(&session.original_context, "  ")
            ));
        }
        output.push_str(&format!(
            "{} {}/{}\n",
            "Rounds:".cyan().bold(),
            session.completed_rounds(),
            session.requested_rounds
        ));

        for round in &session.rounds {
            output.push_str(&Self::section_header(&format!("Round {}", round.round)));
            for stance in Stance::ORDER {
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    Self::speaker(stance),
                    round.argument(stance)
                ));
            }
        }

        if let Some(failure) = &session.error {
            output.push_str(&Self::section_header("Debate Failed"));
            output.push_str(&format!(
                "\n{} {}\n{}\n",
                "Reason:".red().bold(),
                failure.kind,
                failure
            ));
            if let Some(unpaired) = &failure.unpaired_argument {
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    format!("── {} (unanswered) ──", Stance::Supporting.display_name())
                        .yellow()
                        .bold(),
                    unpaired
                ));
            }
        }

        output.push_str(&Self::footer(session.is_completed()));

        output
    }

    /// Format as JSON, identical to the HTTP response body
    pub fn format_json(session: &DebateSession) -> String {
        serde_json::to_string_pretty(session).unwrap_or_else(|_| "{}".to_string())
    }

    fn speaker(stance: Stance) -> String {
        let label = format!("── {} ──", stance.display_name());
        match stance {
            Stance::Supporting => label.green().bold().to_string(),
            Stance::Opposing => label.magenta().bold().to_string(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer(completed: bool) -> String {
        let status = if completed {
            "completed".green().bold()
        } else {
            "failed".red().bold()
        };
        format!("\n{} {}\n{}\n", "Status:".bold(), status, "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debate_domain::{DebateFailure, DebateRound, DebateStatus, FailureKind};

    fn session(rounds: Vec<DebateRound>, error: Option<DebateFailure>) -> DebateSession {
        DebateSession {
            topic: "Tabs beat spaces".to_string(),
            original_context: "Editors differ.".to_string(),
            requested_rounds: 2,
            status: if error.is_some() {
                DebateStatus::Failed
            } else {
                DebateStatus::Completed
            },
            rounds,
            error,
        }
    }

    #[test]
    fn test_format_lists_rounds_in_order() {
        let s = session(
            vec![
                DebateRound::new(1, "first pro", "first con"),
                DebateRound::new(2, "second pro", "second con"),
            ],
            None,
        );
        let out = ConsoleFormatter::format(&s);

        assert!(out.contains("Tabs beat spaces"));
        assert!(out.contains("  Editors differ."));
        let positions: Vec<usize> = ["first pro", "first con", "second pro", "second con"]
            .iter()
            .map(|text| out.find(text).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(!out.contains("Debate Failed"));
    }

    #[test]
    fn test_format_failed_session_shows_diagnostic() {
        let s = session(
            vec![DebateRound::new(1, "pro one", "con one")],
            Some(DebateFailure {
                kind: FailureKind::WorkerUnreachable,
                round: 2,
                stance: Some(Stance::Opposing),
                message: "connection refused".to_string(),
                unpaired_argument: Some("pro two".to_string()),
            }),
        );
        let out = ConsoleFormatter::format(&s);

        assert!(out.contains("Debate Failed"));
        assert!(out.contains("worker_unreachable"));
        assert!(out.contains("round 2 (opposing worker): connection refused"));
        assert!(out.contains("pro two"));
    }

    #[test]
    fn test_format_json_uses_wire_names() {
        let s = session(vec![DebateRound::new(1, "p", "c")], None);
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&s)).unwrap();

        assert_eq!(value["status"], "completed");
        assert_eq!(value["rounds"], 2);
        assert_eq!(value["debate_history"][0]["pro_argument"], "p");
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
