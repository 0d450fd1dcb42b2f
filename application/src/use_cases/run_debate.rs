//! Run Debate use case
//!
//! Drives the round structure of one debate session: for each round the
//! supporting worker is called with the current shared context, its argument
//! is appended, then the opposing worker is called with the updated context.
//! Calls within a session are strictly sequential because every call's input
//! depends on the previous call's output.

use crate::config::DebateParams;
use crate::ports::generation_worker::GenerationWorker;
use crate::ports::progress::{DebateProgressNotifier, NoProgress};
use debate_domain::{
    DebateRequest, DebateRun, DebateSession, DomainError, FailureKind, Stance, string,
};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;
use tracing::{debug, info, warn};

/// Errors that prevent a session from being produced at all.
///
/// Worker failures and timeouts are not errors here: they yield a session
/// with `status: failed` and the completed rounds preserved.
#[derive(Error, Debug)]
pub enum RunDebateError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("Orchestration error: {0}")]
    Orchestration(DomainError),
}

impl From<DomainError> for RunDebateError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::InvalidRequest(message) => RunDebateError::InvalidRequest(message),
            other => RunDebateError::Orchestration(other),
        }
    }
}

/// Why a single worker call did not produce an argument
struct CallFailure {
    kind: FailureKind,
    message: String,
}

/// Use case for running a two-stance debate
pub struct RunDebateUseCase {
    supporting: Arc<dyn GenerationWorker>,
    opposing: Arc<dyn GenerationWorker>,
    params: DebateParams,
}

impl RunDebateUseCase {
    pub fn new(supporting: Arc<dyn GenerationWorker>, opposing: Arc<dyn GenerationWorker>) -> Self {
        Self {
            supporting,
            opposing,
            params: DebateParams::default(),
        }
    }

    pub fn with_params(mut self, params: DebateParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &DebateParams {
        &self.params
    }

    /// Worker arguing for `stance`
    pub fn worker(&self, stance: Stance) -> &Arc<dyn GenerationWorker> {
        match stance {
            Stance::Supporting => &self.supporting,
            Stance::Opposing => &self.opposing,
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, request: DebateRequest) -> Result<DebateSession, RunDebateError> {
        self.execute_with_progress(request, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        request: DebateRequest,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<DebateSession, RunDebateError> {
        let setup = request.validate()?;
        let timeout = setup.timeout.or(self.params.session_timeout);
        // A deadline beyond what `Instant` can represent is no deadline at all
        let deadline = timeout.and_then(|t| Instant::now().checked_add(t));

        info!(
            "Starting debate on {:?} with {} round(s)",
            string::preview(setup.topic.as_str(), 80),
            setup.rounds
        );
        progress.on_session_start(setup.topic.as_str(), setup.rounds);

        let mut run = DebateRun::new(setup.topic, setup.context, setup.rounds);

        'rounds: while run.has_remaining_rounds() {
            let round = run.begin_round()?;
            debug!("Round {} started", round);
            progress.on_round_start(round);

            while let Some(stance) = run.awaiting() {
                match self.call_worker(&run, round, stance, deadline, timeout).await {
                    Ok(argument) => {
                        progress.on_argument(round, stance, true);
                        if let Some(completed) = run.record_argument(argument)? {
                            info!("Round {} completed", completed.round);
                            progress.on_round_complete(&completed);
                        }
                    }
                    Err(failure) => {
                        warn!(
                            "Round {} {} worker failed ({}): {}",
                            round, stance, failure.kind, failure.message
                        );
                        progress.on_argument(round, stance, false);
                        run.fail(failure.kind, failure.message)?;
                        break 'rounds;
                    }
                }
            }
        }

        if !run.state().is_terminal() {
            run.complete()?;
        }

        let session = run.into_session()?;
        info!(
            "Debate {} with {}/{} round(s)",
            session.status,
            session.completed_rounds(),
            session.requested_rounds
        );
        progress.on_session_end(&session);
        Ok(session)
    }

    /// Issue exactly one call to the worker for `stance`, bounded by the session deadline
    async fn call_worker(
        &self,
        run: &DebateRun,
        round: u32,
        stance: Stance,
        deadline: Option<Instant>,
        timeout: Option<Duration>,
    ) -> Result<String, CallFailure> {
        let worker = self.worker(stance);
        let context = run.context().snapshot();
        debug!(
            "Round {}: calling {} worker {} with {} bytes of context",
            round,
            stance,
            worker.name(),
            context.len()
        );

        let call = worker.generate(run.topic().as_str(), context);
        let result = match deadline {
            Some(deadline) => match tokio::time::timeout_at(deadline, call).await {
                Ok(result) => result,
                Err(_) => {
                    return Err(CallFailure {
                        kind: FailureKind::Timeout,
                        message: format!(
                            "session timed out after {}s",
                            timeout.map(|t| t.as_secs()).unwrap_or_default()
                        ),
                    });
                }
            },
            None => call.await,
        };

        result.map_err(|e| CallFailure {
            kind: e.kind(),
            message: e.to_string(),
        })
    }
}
