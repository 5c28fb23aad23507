//! Infrastructure layer for stoic-companion
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod export;
pub mod http;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileEndpointConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FileReplConfig,
};
pub use export::TextResponseExporter;
pub use http::{DEFAULT_ENDPOINT, HttpAskGateway};
