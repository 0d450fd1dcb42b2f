//! Application-level configuration.
//!
//! This module provides configuration types that control how the debate use
//! case behaves:
//!
//! - [`DebateParams`]: session deadline and worker retry policy
//! - [`RetryPolicy`]: bounded exponential backoff around a worker

pub mod debate_params;
pub mod retry_policy;

pub use debate_params::DebateParams;
pub use retry_policy::RetryPolicy;
