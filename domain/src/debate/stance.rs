//! Debate stances

use serde::{Deserialize, Serialize};

/// One of the two fixed orientations a generation worker argues from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stance {
    /// Argues in favour of the topic (speaks first in every round)
    Supporting,
    /// Argues against the topic (speaks second, after seeing the supporting argument)
    Opposing,
}

impl Stance {
    /// Both stances in speaking order
    pub const ORDER: [Stance; 2] = [Stance::Supporting, Stance::Opposing];

    pub fn as_str(&self) -> &'static str {
        match self {
            Stance::Supporting => "supporting",
            Stance::Opposing => "opposing",
        }
    }

    /// Label prefixed to this stance's entries in the shared debate context
    pub fn context_label(&self) -> &'static str {
        match self {
            Stance::Supporting => "Supporting argument",
            Stance::Opposing => "Opposing argument",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Stance::Supporting => "Pro",
            Stance::Opposing => "Con",
        }
    }
}

impl std::fmt::Display for Stance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
