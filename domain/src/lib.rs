//! Domain layer for debate-mediator
//!
//! This crate contains the core debate entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Stance**: Supporting or Opposing; every round is one supporting call
//!   followed by one opposing call.
//! - **Context**: the append-only text threaded between otherwise stateless
//!   generation workers. Each argument is appended before the next call.
//! - **Session**: one orchestration request, from validation to a terminal
//!   `completed` or `failed` status. Only fully completed rounds appear in
//!   its history.

pub mod core;
pub mod debate;

// Re-export commonly used types
pub use crate::core::{error::DomainError, string, topic::DebateTopic};
pub use debate::{
    context::DebateContext,
    entities::{DebateRun, RunState},
    request::{DebateRequest, DebateSetup},
    stance::Stance,
    value_objects::{
        DebateFailure, DebateRound, DebateSession, DebateStatus, FailureKind, StanceArgument,
    },
};
