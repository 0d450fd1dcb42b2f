//! Debate orchestration entities
//!
//! [`DebateRun`] is the mutable state of one session while it is being
//! orchestrated. It moves through
//! `Pending → RoundInProgress(n) → RoundComplete(n) → … → Completed | Failed(n)`
//! and is turned into the immutable [`DebateSession`] once terminal.

use super::context::DebateContext;
use super::stance::Stance;
use super::value_objects::{
    DebateFailure, DebateRound, DebateSession, DebateStatus, FailureKind, StanceArgument,
};
use crate::core::error::DomainError;
use crate::core::topic::DebateTopic;

/// State of a debate run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Created, no worker contacted yet
    Pending,
    /// Round `round` started; `awaiting` is the stance whose argument is next
    RoundInProgress { round: u32, awaiting: Stance },
    /// Round `round` fully recorded (checkpoint between rounds)
    RoundComplete { round: u32 },
    /// All requested rounds recorded
    Completed,
    /// Stopped during `round`
    Failed { round: u32 },
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunState::Completed | RunState::Failed { .. })
    }
}

/// One debate session under orchestration (Entity)
#[derive(Debug, Clone)]
pub struct DebateRun {
    topic: DebateTopic,
    requested_rounds: u32,
    context: DebateContext,
    rounds: Vec<DebateRound>,
    state: RunState,
    /// Supporting argument of the round in progress
    pending: Option<StanceArgument>,
    failure: Option<DebateFailure>,
}

impl DebateRun {
    pub fn new(topic: DebateTopic, context: impl Into<String>, requested_rounds: u32) -> Self {
        Self {
            topic,
            requested_rounds,
            context: DebateContext::new(context),
            rounds: Vec::new(),
            state: RunState::Pending,
            pending: None,
            failure: None,
        }
    }

    pub fn topic(&self) -> &DebateTopic {
        &self.topic
    }

    pub fn requested_rounds(&self) -> u32 {
        self.requested_rounds
    }

    pub fn context(&self) -> &DebateContext {
        &self.context
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Stance whose argument the run is waiting for, if a round is in progress
    pub fn awaiting(&self) -> Option<Stance> {
        match self.state {
            RunState::RoundInProgress { awaiting, .. } => Some(awaiting),
            _ => None,
        }
    }

    /// Whether another round should be started
    pub fn has_remaining_rounds(&self) -> bool {
        match self.state {
            RunState::Pending => self.requested_rounds > 0,
            RunState::RoundComplete { round } => round < self.requested_rounds,
            _ => false,
        }
    }

    /// Enter the next round, returning its 1-based index
    pub fn begin_round(&mut self) -> Result<u32, DomainError> {
        if !self.has_remaining_rounds() {
            return Err(self.invalid("begin a round"));
        }
        let round = self.rounds.len() as u32 + 1;
        self.state = RunState::RoundInProgress {
            round,
            awaiting: Stance::Supporting,
        };
        Ok(round)
    }

    /// Record the argument of the awaited stance.
    ///
    /// The argument is appended to the shared context immediately. The round
    /// only reaches the history once the opposing argument is recorded; it is
    /// returned at that point.
    pub fn record_argument(
        &mut self,
        argument: impl Into<String>,
    ) -> Result<Option<DebateRound>, DomainError> {
        let RunState::RoundInProgress { round, awaiting } = self.state else {
            return Err(self.invalid("record an argument"));
        };
        let argument = StanceArgument::new(awaiting, round, argument);
        self.context.append(argument.stance, &argument.text);

        match awaiting {
            Stance::Supporting => {
                self.pending = Some(argument);
                self.state = RunState::RoundInProgress {
                    round,
                    awaiting: Stance::Opposing,
                };
                Ok(None)
            }
            Stance::Opposing => {
                let supporting = self
                    .pending
                    .take()
                    .ok_or_else(|| self.invalid("close a round without a supporting argument"))?;
                let completed = DebateRound::new(round, supporting.text, argument.text);
                self.rounds.push(completed.clone());
                self.state = RunState::RoundComplete { round };
                Ok(Some(completed))
            }
        }
    }

    /// Mark the run completed; every requested round must be recorded
    pub fn complete(&mut self) -> Result<(), DomainError> {
        match self.state {
            RunState::RoundComplete { round } if round == self.requested_rounds => {
                self.state = RunState::Completed;
                Ok(())
            }
            RunState::Pending if self.requested_rounds == 0 => {
                self.state = RunState::Completed;
                Ok(())
            }
            _ => Err(self.invalid("complete")),
        }
    }

    /// Stop the run at the current round.
    ///
    /// A lone supporting argument of the failed round stays in the context but
    /// is moved to the failure diagnostic instead of the history.
    pub fn fail(&mut self, kind: FailureKind, message: impl Into<String>) -> Result<(), DomainError> {
        let (round, stance) = match self.state {
            RunState::RoundInProgress { round, awaiting } => (round, Some(awaiting)),
            RunState::Pending | RunState::RoundComplete { .. } => {
                (self.rounds.len() as u32 + 1, None)
            }
            RunState::Completed | RunState::Failed { .. } => return Err(self.invalid("fail")),
        };

        self.failure = Some(DebateFailure {
            kind,
            round,
            stance,
            message: message.into(),
            unpaired_argument: self.pending.take().map(|a| a.text),
        });
        self.state = RunState::Failed { round };
        Ok(())
    }

    /// Build the caller-facing session from a terminal run
    pub fn into_session(self) -> Result<DebateSession, DomainError> {
        let status = match self.state {
            RunState::Completed => DebateStatus::Completed,
            RunState::Failed { .. } => DebateStatus::Failed,
            _ => return Err(self.invalid("build a session")),
        };

        Ok(DebateSession {
            topic: self.topic.into_inner(),
            original_context: self.context.seed().to_string(),
            requested_rounds: self.requested_rounds,
            rounds: self.rounds,
            status,
            error: self.failure,
        })
    }

    fn invalid(&self, action: &str) -> DomainError {
        DomainError::InvalidTransition(format!("cannot {} in state {:?}", action, self.state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(rounds: u32) -> DebateRun {
        DebateRun::new(DebateTopic::try_new("X").unwrap(), "", rounds)
    }

    #[test]
    fn test_full_run_completes() {
        let mut run = run(2);
        for n in 1..=2 {
            assert_eq!(run.begin_round().unwrap(), n);
            assert_eq!(run.awaiting(), Some(Stance::Supporting));
            assert!(run.record_argument(format!("S{}", n)).unwrap().is_none());
            assert_eq!(run.awaiting(), Some(Stance::Opposing));
            let round = run.record_argument(format!("O{}", n)).unwrap().unwrap();
            assert_eq!(round, DebateRound::new(n, format!("S{}", n), format!("O{}", n)));
        }
        assert!(!run.has_remaining_rounds());
        run.complete().unwrap();

        let session = run.into_session().unwrap();
        assert_eq!(session.status, DebateStatus::Completed);
        assert_eq!(session.rounds.len(), 2);
        assert!(session.error.is_none());
    }

    #[test]
    fn test_opposing_failure_keeps_supporting_out_of_history() {
        let mut run = run(2);
        run.begin_round().unwrap();
        run.record_argument("S1").unwrap();
        run.record_argument("O1").unwrap();
        run.begin_round().unwrap();
        run.record_argument("S2").unwrap();
        run.fail(FailureKind::WorkerRemoteError, "boom").unwrap();

        assert!(run.context().snapshot().contains("S2"));
        assert_eq!(run.state(), RunState::Failed { round: 2 });

        let session = run.into_session().unwrap();
        assert_eq!(session.status, DebateStatus::Failed);
        assert_eq!(session.rounds, vec![DebateRound::new(1, "S1", "O1")]);
        let failure = session.error.unwrap();
        assert_eq!(failure.round, 2);
        assert_eq!(failure.stance, Some(Stance::Opposing));
        assert_eq!(failure.unpaired_argument.as_deref(), Some("S2"));
    }

    #[test]
    fn test_supporting_failure_has_no_unpaired_argument() {
        let mut run = run(1);
        run.begin_round().unwrap();
        run.fail(FailureKind::WorkerUnreachable, "refused").unwrap();

        let session = run.into_session().unwrap();
        assert!(session.rounds.is_empty());
        let failure = session.error.unwrap();
        assert_eq!(failure.round, 1);
        assert_eq!(failure.stance, Some(Stance::Supporting));
        assert!(failure.unpaired_argument.is_none());
    }

    #[test]
    fn test_max_round_count_fails_without_history() {
        let mut run = run(u32::MAX);
        assert!(run.has_remaining_rounds());
        run.begin_round().unwrap();
        run.fail(FailureKind::Timeout, "deadline").unwrap();

        let session = run.into_session().unwrap();
        assert_eq!(session.status, DebateStatus::Failed);
        assert_eq!(session.requested_rounds, u32::MAX);
        assert!(session.rounds.is_empty());
    }

    #[test]
    fn test_illegal_transitions_rejected() {
        let mut run = run(1);
        assert!(run.record_argument("early").is_err());
        assert!(run.complete().is_err());
        assert!(run.clone().into_session().is_err());

        run.begin_round().unwrap();
        assert!(run.begin_round().is_err());
        run.record_argument("S1").unwrap();
        run.record_argument("O1").unwrap();
        assert!(run.begin_round().is_err());
        run.complete().unwrap();
        assert!(run.fail(FailureKind::Timeout, "late").is_err());
    }

    #[test]
    fn test_session_preserves_original_context() {
        let mut run = DebateRun::new(DebateTopic::try_new("X").unwrap(), "seed", 1);
        run.begin_round().unwrap();
        run.record_argument("S1").unwrap();
        run.record_argument("O1").unwrap();
        run.complete().unwrap();

        let session = run.into_session().unwrap();
        assert_eq!(session.original_context, "seed");
    }
}
