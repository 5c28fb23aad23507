//! Question value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A question to be sent to the ask endpoint (Value Object)
///
/// The content is always trimmed and never empty, so a `Question`
/// can be submitted without further validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Question {
    content: String,
}

impl Question {
    /// Create a new question from raw user input
    ///
    /// Surrounding whitespace is removed. Returns
    /// [`DomainError::EmptyQuestion`] if nothing is left.
    pub fn new(content: impl AsRef<str>) -> Result<Self, DomainError> {
        Self::try_new(content).ok_or(DomainError::EmptyQuestion)
    }

    /// Try to create a new question, returning None if the input is blank
    pub fn try_new(content: impl AsRef<str>) -> Option<Self> {
        let trimmed = content.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                content: trimmed.to_string(),
            })
        }
    }

    /// Get the question content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for Question {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Question::new(s)
    }
}

impl TryFrom<&str> for Question {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Question::new(s)
    }
}

impl From<Question> for String {
    fn from(q: Question) -> Self {
        q.content
    }
}
