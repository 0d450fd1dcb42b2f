//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod generation_worker;
pub mod progress;
pub mod retrying_worker;
