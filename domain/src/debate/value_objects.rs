//! Debate value objects - immutable records produced by a debate session.
//!
//! - [`StanceArgument`] - one worker's output, tagged with stance and round
//! - [`DebateRound`] - a fully completed supporting/opposing exchange
//! - [`DebateFailure`] - what stopped a failed session
//! - [`DebateSession`] - the caller-facing aggregate

use super::stance::Stance;
use serde::{Deserialize, Serialize};

/// Text produced by one worker invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StanceArgument {
    pub stance: Stance,
    /// 1-based round in which the argument was produced
    pub round: u32,
    pub text: String,
}

impl StanceArgument {
    pub fn new(stance: Stance, round: u32, text: impl Into<String>) -> Self {
        Self {
            stance,
            round,
            text: text.into(),
        }
    }
}

/// One complete round: both calls succeeded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateRound {
    /// 1-based, contiguous round index
    pub round: u32,
    #[serde(rename = "pro_argument")]
    pub supporting: String,
    #[serde(rename = "con_argument")]
    pub opposing: String,
}

impl DebateRound {
    pub fn new(round: u32, supporting: impl Into<String>, opposing: impl Into<String>) -> Self {
        Self {
            round,
            supporting: supporting.into(),
            opposing: opposing.into(),
        }
    }

    pub fn argument(&self, stance: Stance) -> &str {
        match stance {
            Stance::Supporting => &self.supporting,
            Stance::Opposing => &self.opposing,
        }
    }
}

/// Terminal status of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebateStatus {
    Completed,
    Failed,
}

impl DebateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebateStatus::Completed => "completed",
            DebateStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for DebateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Category of the failure that stopped a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Transport failure reaching the worker
    WorkerUnreachable,
    /// Worker answered without a usable `argument` field
    WorkerInvalidResponse,
    /// Worker reported a failure for the given inputs
    WorkerRemoteError,
    /// The session deadline elapsed while a call was in flight
    Timeout,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::WorkerUnreachable => "worker_unreachable",
            FailureKind::WorkerInvalidResponse => "worker_invalid_response",
            FailureKind::WorkerRemoteError => "worker_remote_error",
            FailureKind::Timeout => "timeout",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Diagnostic describing what stopped a failed session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateFailure {
    pub kind: FailureKind,
    /// Round that was in progress when the failure happened
    pub round: u32,
    /// Stance whose call failed, if a call was in flight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stance: Option<Stance>,
    /// Human-readable description
    pub message: String,
    /// Supporting argument of the failed round, never part of the history
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unpaired_argument: Option<String>,
}

impl std::fmt::Display for DebateFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.stance {
            Some(stance) => write!(
                f,
                "round {} ({} worker): {}",
                self.round, stance, self.message
            ),
            None => write!(f, "round {}: {}", self.round, self.message),
        }
    }
}

/// Complete result of a debate session (aggregate root, immutable once built)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateSession {
    pub topic: String,
    /// Context supplied by the caller, before any argument was appended
    #[serde(rename = "context")]
    pub original_context: String,
    /// Round count the caller asked for
    #[serde(rename = "rounds")]
    pub requested_rounds: u32,
    /// Fully completed rounds, in order
    #[serde(rename = "debate_history")]
    pub rounds: Vec<DebateRound>,
    pub status: DebateStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<DebateFailure>,
}

impl DebateSession {
    pub fn is_completed(&self) -> bool {
        self.status == DebateStatus::Completed
    }

    pub fn completed_rounds(&self) -> usize {
        self.rounds.len()
    }
}
