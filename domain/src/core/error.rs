//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The caller supplied an unusable request (empty topic, bad round count).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The debate state machine was driven out of order.
    #[error("Invalid state transition: {0}")]
    InvalidTransition(String),
}

impl DomainError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        DomainError::InvalidRequest(message.into())
    }

    /// Check if this error was caused by caller input
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, DomainError::InvalidRequest(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_display() {
        let error = DomainError::invalid_request("Topic is required");
        assert_eq!(error.to_string(), "Invalid request: Topic is required");
    }

    #[test]
    fn test_is_invalid_request_check() {
        assert!(DomainError::invalid_request("x").is_invalid_request());
        assert!(!DomainError::InvalidTransition("x".to_string()).is_invalid_request());
    }
}
