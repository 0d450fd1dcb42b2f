//! Generation worker port
//!
//! Defines the interface for calling an external text-generation worker.
//! Two instances exist at runtime, one per stance; they share this contract
//! and differ only in where they live and how they frame their prompt.

use async_trait::async_trait;
use debate_domain::FailureKind;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when calling a generation worker
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkerError {
    #[error("Worker unreachable: {0}")]
    Unreachable(String),

    #[error("Invalid worker response: {0}")]
    InvalidResponse(String),

    #[error("Worker reported an error{}: {message}", http_status_suffix(.status))]
    Remote {
        status: Option<u16>,
        message: String,
    },

    #[error("Worker request timed out")]
    Timeout,
}

impl WorkerError {
    pub fn remote(status: u16, message: impl Into<String>) -> Self {
        WorkerError::Remote {
            status: Some(status),
            message: message.into(),
        }
    }

    /// Session failure category for this error
    pub fn kind(&self) -> FailureKind {
        match self {
            WorkerError::Unreachable(_) => FailureKind::WorkerUnreachable,
            WorkerError::InvalidResponse(_) => FailureKind::WorkerInvalidResponse,
            WorkerError::Remote { .. } => FailureKind::WorkerRemoteError,
            WorkerError::Timeout => FailureKind::Timeout,
        }
    }

    /// Whether repeating the same call may succeed.
    ///
    /// Malformed responses and client-side (4xx) rejections are deterministic
    /// for the given inputs and are never retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            WorkerError::Unreachable(_) | WorkerError::Timeout => true,
            WorkerError::Remote { status, .. } => status.is_none_or(|s| s >= 500),
            WorkerError::InvalidResponse(_) => false,
        }
    }
}

fn http_status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {})", s)).unwrap_or_default()
}

/// Health as reported by a worker's own health contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerHealth {
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl WorkerHealth {
    pub fn healthy() -> Self {
        Self {
            healthy: true,
            detail: None,
        }
    }

    pub fn unhealthy(detail: impl Into<String>) -> Self {
        Self {
            healthy: false,
            detail: Some(detail.into()),
        }
    }
}

/// A stateless, re-entrant argument generator
///
/// Implementations (adapters) live in the infrastructure layer. Each call is
/// a single attempt; retry policies wrap an implementation from the outside.
#[async_trait]
pub trait GenerationWorker: Send + Sync {
    /// Identifier used in logs (typically the worker address)
    fn name(&self) -> &str;

    /// Generate an argument for `topic` given everything said so far.
    ///
    /// Returns the argument text with surrounding whitespace trimmed.
    async fn generate(&self, topic: &str, context: &str) -> Result<String, WorkerError>;

    /// Probe the worker's own health endpoint
    async fn health(&self) -> Result<WorkerHealth, WorkerError> {
        Ok(WorkerHealth::healthy())
    }
}
