//! Inbound debate request and its validation

use crate::core::error::DomainError;
use crate::core::topic::DebateTopic;
use serde::{Deserialize, Serialize};
use std::time::Duration;

fn default_rounds() -> i64 {
    1
}

/// Raw request to start a debate, as received from a caller.
///
/// `rounds` is signed so that negative counts reach validation and are
/// reported as [`DomainError::InvalidRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateRequest {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub context: String,
    #[serde(default = "default_rounds")]
    pub rounds: i64,
    /// Overall session deadline, overriding the configured default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

impl DebateRequest {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            context: String::new(),
            rounds: default_rounds(),
            timeout_seconds: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    pub fn with_rounds(mut self, rounds: i64) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// Validate the request before any worker is contacted.
    ///
    /// `rounds` must be at least 1; a zero-round debate is rejected.
    pub fn validate(&self) -> Result<DebateSetup, DomainError> {
        let topic = DebateTopic::try_new(self.topic.clone())?;

        if self.rounds < 1 {
            return Err(DomainError::invalid_request(format!(
                "rounds must be at least 1 (got {})",
                self.rounds
            )));
        }
        let rounds = u32::try_from(self.rounds).map_err(|_| {
            DomainError::invalid_request(format!("rounds is too large (got {})", self.rounds))
        })?;

        let timeout = match self.timeout_seconds {
            Some(0) => {
                return Err(DomainError::invalid_request(
                    "timeout_seconds must be greater than 0",
                ));
            }
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        Ok(DebateSetup {
            topic,
            context: self.context.clone(),
            rounds,
            timeout,
        })
    }
}

/// A validated debate request, ready to be orchestrated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebateSetup {
    pub topic: DebateTopic,
    pub context: String,
    pub rounds: u32,
    pub timeout: Option<Duration>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_fields_absent() {
        let request: DebateRequest = serde_json::from_str(r#"{"topic": "X"}"#).unwrap();
        assert_eq!(request.context, "");
        assert_eq!(request.rounds, 1);
        assert_eq!(request.timeout_seconds, None);
    }

    #[test]
    fn test_missing_topic_is_invalid_request() {
        let request: DebateRequest = serde_json::from_str(r#"{"rounds": 2}"#).unwrap();
        let err = request.validate().unwrap_err();
        assert!(err.is_invalid_request());
    }

    #[test]
    fn test_validate_accepts_valid_request() {
        let setup = DebateRequest::new("X")
            .with_context("seed")
            .with_rounds(3)
            .with_timeout_seconds(30)
            .validate()
            .unwrap();
        assert_eq!(setup.topic.as_str(), "X");
        assert_eq!(setup.context, "seed");
        assert_eq!(setup.rounds, 3);
        assert_eq!(setup.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_zero_and_negative_rounds_rejected() {
        for rounds in [0, -1, -100] {
            let err = DebateRequest::new("X").with_rounds(rounds).validate();
            assert!(matches!(err, Err(DomainError::InvalidRequest(_))));
        }
    }

    #[test]
    fn test_rounds_overflow_rejected() {
        let err = DebateRequest::new("X")
            .with_rounds(i64::from(u32::MAX) + 1)
            .validate();
        assert!(err.is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = DebateRequest::new("X").with_timeout_seconds(0).validate();
        assert!(err.is_err());
    }
}
