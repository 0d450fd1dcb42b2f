//! Presentation layer for debate-mediator
//!
//! This crate contains the HTTP API, CLI definitions, output formatters
//! and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;
pub mod server;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, LogFormat, OutputFormat, RunArgs, ServeArgs};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use server::{AppState, create_router};
