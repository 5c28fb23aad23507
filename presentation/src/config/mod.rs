//! Presentation-level configuration
//!
//! Resolved settings for output formatting and REPL behavior. The binary
//! builds these from the merged file configuration and CLI flags.

use std::path::PathBuf;
use stoic_domain::OutputFormat;

/// Expand a leading `~` or `~/` to the home directory.
///
/// Other paths, including `~user`, are returned unchanged. If the home
/// directory is unknown the path is also returned unchanged.
pub fn expand_home(raw: &str) -> PathBuf {
    let rest = match raw.strip_prefix('~') {
        Some("") => "",
        Some(rest) => match rest.strip_prefix('/') {
            Some(rest) => rest,
            None => return PathBuf::from(raw),
        },
        None => return PathBuf::from(raw),
    };

    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => PathBuf::from(raw),
    }
}

/// Output configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// How one-shot answers are printed
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Show the loading spinner
    pub show_progress: bool,
    /// Where line history is kept (`None` = in-memory only)
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}
