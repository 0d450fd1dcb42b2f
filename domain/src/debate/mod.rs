//! Debate subdomain
//!
//! - [`stance::Stance`]: the two fixed orientations
//! - [`context::DebateContext`]: the append-only shared context
//! - [`entities::DebateRun`]: the per-session state machine
//! - [`value_objects`]: rounds, failures and the final session
//! - [`request::DebateRequest`]: inbound request and validation

pub mod context;
pub mod entities;
pub mod request;
pub mod stance;
pub mod value_objects;
