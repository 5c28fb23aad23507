//! Presentation layer for stoic-companion
//!
//! This crate contains CLI definitions, the console view, output
//! formatters, the loading indicator and the interactive session.

pub mod chat;
pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod view;

// Re-export commonly used types
pub use chat::{AskRepl, ReplCommand};
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ReplConfig, expand_home};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::LoadingIndicator;
pub use view::ConsoleView;
