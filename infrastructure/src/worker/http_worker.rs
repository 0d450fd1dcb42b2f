//! reqwest-based generation worker client.

use super::protocol::{GenerateRequest, HealthPayload, parse_generate_response};
use async_trait::async_trait;
use debate_application::{GenerationWorker, WorkerError, WorkerHealth};
use std::time::Duration;
use tracing::{debug, warn};

/// Client for one generation worker reachable over HTTP.
///
/// Each call is a single attempt. Wrap in
/// [`RetryingWorker`](debate_application::RetryingWorker) for retries.
pub struct HttpGenerationWorker {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGenerationWorker {
    /// Create a client for the worker at `base_url` with a per-request timeout
    pub fn new(base_url: impl Into<String>, request_timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .user_agent(concat!("debate-mediator/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client sharing an existing connection pool
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn transport_error(&self, e: reqwest::Error) -> WorkerError {
        if e.is_timeout() {
            WorkerError::Timeout
        } else {
            WorkerError::Unreachable(format!("{}: {}", self.base_url, e))
        }
    }
}

#[async_trait]
impl GenerationWorker for HttpGenerationWorker {
    fn name(&self) -> &str {
        &self.base_url
    }

    async fn generate(&self, topic: &str, context: &str) -> Result<String, WorkerError> {
        let url = format!("{}/generate", self.base_url);
        debug!("POST {} ({} bytes of context)", url, context.len());

        let response = self
            .client
            .post(&url)
            .json(&GenerateRequest { topic, context })
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        let result = parse_generate_response(status.as_u16(), &body);
        if let Err(e) = &result {
            warn!("Worker {} returned HTTP {}: {}", self.base_url, status.as_u16(), e);
        }
        result
    }

    async fn health(&self) -> Result<WorkerHealth, WorkerError> {
        let url = format!("{}/health", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let payload = response.json::<HealthPayload>().await.ok();

        match payload {
            Some(p) if status.is_success() && p.status == "healthy" => Ok(WorkerHealth::healthy()),
            Some(p) => Ok(WorkerHealth::unhealthy(
                p.error.unwrap_or_else(|| format!("status '{}'", p.status)),
            )),
            None => Ok(WorkerHealth::unhealthy(format!(
                "HTTP {} without a health payload",
                status.as_u16()
            ))),
        }
    }
}
