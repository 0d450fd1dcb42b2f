//! Request and response bodies that are not domain types

use debate_application::WorkerHealth;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

/// One worker's answer to a health probe
#[derive(Debug, Serialize, Deserialize)]
pub struct WorkerStatus {
    pub worker: String,
    pub healthy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl WorkerStatus {
    pub fn from_probe(worker: &str, probe: Result<WorkerHealth, String>) -> Self {
        match probe {
            Ok(health) => Self {
                worker: worker.to_string(),
                healthy: health.healthy,
                detail: health.detail,
            },
            Err(error) => Self {
                worker: worker.to_string(),
                healthy: false,
                detail: Some(error),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WorkersHealth {
    pub supporting: WorkerStatus,
    pub opposing: WorkerStatus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WorkersHealthResponse {
    pub status: String,
    pub workers: WorkersHealth,
}

impl WorkersHealthResponse {
    pub fn new(supporting: WorkerStatus, opposing: WorkerStatus) -> Self {
        let status = if supporting.healthy && opposing.healthy {
            "healthy"
        } else {
            "degraded"
        };
        Self {
            status: status.to_string(),
            workers: WorkersHealth {
                supporting,
                opposing,
            },
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.workers.supporting.healthy && self.workers.opposing.healthy
    }
}
