//! Core domain concepts shared across the debate subdomain.
//!
//! - [`topic::DebateTopic`]: a validated, non-empty debate subject
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: small text helpers used for log previews

pub mod error;
pub mod string;
pub mod topic;
