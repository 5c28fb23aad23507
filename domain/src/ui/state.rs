//! UI state machine for a single answer area

use crate::answer::result::AnswerResult;
use serde::Serialize;

/// What the answer area is currently showing
///
/// ```text
/// Idle ──submit──▶ Loading ──resolve──▶ Displaying
///   ▲                 ▲                     │
///   │                 └──────submit─────────┘
///   └────────────────────clear──────────────┘
/// ```
///
/// An empty submit goes straight to `Displaying` from any state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "result", rename_all = "lowercase")]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Displaying(AnswerResult),
}

impl UiState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The displayed result, if any
    pub fn result(&self) -> Option<&AnswerResult> {
        match self {
            Self::Displaying(result) => Some(result),
            _ => None,
        }
    }

    /// Short label used in status output
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Displaying(AnswerResult::Success(_)) => "displaying answer",
            Self::Displaying(AnswerResult::Failure(_)) => "displaying failure",
        }
    }
}

impl std::fmt::Display for UiState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(UiState::default(), UiState::Idle);
        assert!(UiState::default().result().is_none());
    }

    #[test]
    fn test_loading() {
        assert!(UiState::Loading.is_loading());
        assert!(!UiState::Idle.is_loading());
    }

    #[test]
    fn test_displaying_exposes_result() {
        let state = UiState::Displaying(AnswerResult::Failure("nope".to_string()));
        assert_eq!(state.result().map(AnswerResult::text), Some("nope"));
        assert_eq!(state.as_str(), "displaying failure");
    }
}
