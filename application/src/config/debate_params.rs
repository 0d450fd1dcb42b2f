//! Debate parameters: session-level control.
//!
//! [`DebateParams`] groups the static parameters that control
//! [`RunDebateUseCase`](crate::use_cases::run_debate::RunDebateUseCase).
//! These are deployment concerns, not part of a debate request.

use super::retry_policy::RetryPolicy;
use std::time::Duration;

/// Session control parameters.
#[derive(Debug, Clone, Default)]
pub struct DebateParams {
    /// Default overall deadline for one session; a request may override it.
    pub session_timeout: Option<Duration>,
    /// Retry policy applied around each worker.
    pub retry: RetryPolicy,
}

impl DebateParams {
    // ==================== Builder Methods ====================

    pub fn with_session_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.session_timeout = timeout;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Creates params from an optional timeout in seconds; `0` means no deadline.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            session_timeout: seconds.filter(|s| *s > 0).map(Duration::from_secs),
            ..Default::default()
        }
    }
}
