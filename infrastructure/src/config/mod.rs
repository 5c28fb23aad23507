//! Configuration file loading for stoic-companion
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `STOIC_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./stoic.toml` or `./.stoic.toml`
//! 4. Global: `<config_dir>/stoic-companion/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileEndpointConfig, FileLoggingConfig, FileOutputConfig,
    FileOutputFormat, FileReplConfig,
};
pub use loader::ConfigLoader;
