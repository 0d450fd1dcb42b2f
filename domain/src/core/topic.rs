//! Debate topic value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// The subject both stances argue about (Value Object)
///
/// Immutable and guaranteed non-empty once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DebateTopic {
    content: String,
}

impl DebateTopic {
    /// Try to create a new topic, rejecting empty or whitespace-only input
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::invalid_request("Topic is required"));
        }
        Ok(Self { content })
    }

    /// Get the topic text
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner text
    pub fn into_inner(self) -> String {
        self.content
    }
}

impl std::fmt::Display for DebateTopic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for DebateTopic {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        DebateTopic::try_new(value)
    }
}

impl From<DebateTopic> for String {
    fn from(topic: DebateTopic) -> Self {
        topic.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_creation() {
        let topic = DebateTopic::try_new("Remote work").unwrap();
        assert_eq!(topic.as_str(), "Remote work");
        assert_eq!(topic.to_string(), "Remote work");
    }

    #[test]
    fn test_empty_topic_rejected() {
        assert!(DebateTopic::try_new("").is_err());
        assert!(DebateTopic::try_new("   \n").is_err());
    }

    #[test]
    fn test_topic_keeps_surrounding_text_verbatim() {
        let topic = DebateTopic::try_new("  AI regulation ").unwrap();
        assert_eq!(topic.as_str(), "  AI regulation ");
    }

    #[test]
    fn test_deserialize_rejects_blank_topic() {
        let result: Result<DebateTopic, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }
}
