//! Retrying worker: wraps a [`GenerationWorker`] with a [`RetryPolicy`].
//!
//! The orchestrator always issues one call per call site; retries are layered
//! on here, per deployment, without the orchestrator knowing.
//!
//! ```text
//! RunDebateUseCase ──generate()──▶ RetryingWorker ──generate()──▶ inner worker
//!                                     │  retryable error?
//!                                     └─ sleep(backoff) and call again (≤ max_attempts)
//! ```

use super::generation_worker::{GenerationWorker, WorkerError, WorkerHealth};
use crate::config::RetryPolicy;
use async_trait::async_trait;
use tracing::{debug, warn};

/// A worker that repeats retryable failures with bounded exponential backoff.
pub struct RetryingWorker<W> {
    inner: W,
    policy: RetryPolicy,
}

impl<W: GenerationWorker> RetryingWorker<W> {
    pub fn new(inner: W, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

#[async_trait]
impl<W: GenerationWorker> GenerationWorker for RetryingWorker<W> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn generate(&self, topic: &str, context: &str) -> Result<String, WorkerError> {
        let mut attempt = 1;
        loop {
            match self.inner.generate(topic, context).await {
                Ok(argument) => {
                    if attempt > 1 {
                        debug!("Worker {} succeeded on attempt {}", self.name(), attempt);
                    }
                    return Ok(argument);
                }
                Err(e) if e.is_retryable() && attempt < self.policy.max_attempts => {
                    let delay = self.policy.backoff_for(attempt);
                    warn!(
                        "Worker {} failed (attempt {}/{}), retrying in {:?}: {}",
                        self.name(),
                        attempt,
                        self.policy.max_attempts,
                        delay,
                        e
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn health(&self) -> Result<WorkerHealth, WorkerError> {
        self.inner.health().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Mock worker that replays scripted results and counts calls
    struct FlakyWorker {
        results: Mutex<VecDeque<Result<String, WorkerError>>>,
        calls: AtomicUsize,
    }

    impl FlakyWorker {
        fn new(results: Vec<Result<String, WorkerError>>) -> Self {
            Self {
                results: Mutex::new(results.into()),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl GenerationWorker for FlakyWorker {
        fn name(&self) -> &str {
            "flaky"
        }

        async fn generate(&self, _topic: &str, _context: &str) -> Result<String, WorkerError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(WorkerError::Unreachable("script exhausted".into())))
        }
    }

    fn policy(attempts: u32) -> RetryPolicy {
        RetryPolicy::default()
            .with_max_attempts(attempts)
            .with_backoff(Duration::from_millis(10), Duration::from_millis(40))
    }

    #[tokio::test(start_paused = true)]
    async fn test_retries_until_success() {
        let worker = RetryingWorker::new(
            FlakyWorker::new(vec![
                Err(WorkerError::Unreachable("refused".into())),
                Err(WorkerError::remote(503, "loading")),
                Ok("argument".into()),
            ]),
            policy(3),
        );

        let result = worker.generate("X", "").await;
        assert_eq!(result.unwrap(), "argument");
        assert_eq!(worker.inner.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_gives_up_after_max_attempts() {
        let worker = RetryingWorker::new(
            FlakyWorker::new(vec![
                Err(WorkerError::Timeout),
                Err(WorkerError::Timeout),
                Ok("too late".into()),
            ]),
            policy(2),
        );

        assert_eq!(worker.generate("X", "").await, Err(WorkerError::Timeout));
        assert_eq!(worker.inner.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_retryable_error_fails_immediately() {
        let worker = RetryingWorker::new(
            FlakyWorker::new(vec![Err(WorkerError::InvalidResponse(
                "missing argument".into(),
            ))]),
            policy(5),
        );

        assert!(matches!(
            worker.generate("X", "").await,
            Err(WorkerError::InvalidResponse(_))
        ));
        assert_eq!(worker.inner.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_default_policy_is_single_attempt() {
        let worker = RetryingWorker::new(
            FlakyWorker::new(vec![
                Err(WorkerError::Unreachable("refused".into())),
                Ok("never reached".into()),
            ]),
            RetryPolicy::none(),
        );

        assert!(worker.generate("X", "").await.is_err());
        assert_eq!(worker.inner.calls.load(Ordering::SeqCst), 1);
    }
}
