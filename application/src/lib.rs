//! Application layer for debate-mediator
//!
//! This crate contains the debate use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DebateParams, RetryPolicy};
pub use ports::{
    generation_worker::{GenerationWorker, WorkerError, WorkerHealth},
    progress::{DebateProgressNotifier, NoProgress},
    retrying_worker::RetryingWorker,
};
pub use use_cases::run_debate::{RunDebateError, RunDebateUseCase};
