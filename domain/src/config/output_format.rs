//! Output format value object

use serde::{Deserialize, Serialize};

/// How a displayed answer is rendered in one-shot mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// JSON object with question, status and text
    Json,
}
