//! Configuration file loading for debate-mediator
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `AGENT_PRO_URL`, `AGENT_CON_URL`, `DEBATE_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./mediator.toml` or `./.mediator.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/debate-mediator/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileDebateConfig, FileLogFormat, FileLoggingConfig,
    FileRetryConfig, FileServerConfig, FileWorkersConfig,
};
pub use loader::ConfigLoader;
