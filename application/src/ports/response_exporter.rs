//! Response export port
//!
//! Saves the currently displayed question/answer pair somewhere outside
//! the process.

use std::path::{Path, PathBuf};
use stoic_domain::{AnswerResult, Question};
use thiserror::Error;

/// Errors that can occur while exporting a response
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No response to save yet")]
    NothingToExport,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The question together with the result displayed for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSnapshot {
    pub question: Question,
    pub result: AnswerResult,
}

impl ResponseSnapshot {
    pub fn new(question: Question, result: AnswerResult) -> Self {
        Self { question, result }
    }
}

/// Writes a snapshot into a target directory
pub trait ResponseExporter: Send + Sync {
    /// Export the snapshot and return the path that was written
    fn export(&self, snapshot: &ResponseSnapshot, dir: &Path) -> Result<PathBuf, ExportError>;
}
