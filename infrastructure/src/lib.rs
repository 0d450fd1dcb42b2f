//! Infrastructure layer for debate-mediator
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file loading.

pub mod config;
pub mod worker;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileDebateConfig, FileLogFormat,
    FileLoggingConfig, FileRetryConfig, FileServerConfig, FileWorkersConfig,
};
pub use worker::HttpGenerationWorker;
