//! Answer result value object

use super::messages::NO_WISDOM_MESSAGE;
use super::reply::AskReply;
use serde::{Deserialize, Serialize};

/// Outcome of one round trip, as displayed to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "text", rename_all = "lowercase")]
pub enum AnswerResult {
    Success(String),
    Failure(String),
}

impl AnswerResult {
    /// Interpret a decoded reply.
    ///
    /// `answer` wins over `error`; a reply with neither falls back to
    /// [`NO_WISDOM_MESSAGE`].
    pub fn from_reply(reply: AskReply) -> Self {
        match reply {
            AskReply {
                answer: Some(answer),
                ..
            } => Self::Success(answer),
            AskReply {
                error: Some(error), ..
            } => Self::Failure(error),
            _ => Self::Failure(NO_WISDOM_MESSAGE.to_string()),
        }
    }

    /// The text shown in the answer area
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Failure(text) => text,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

impl From<AskReply> for AnswerResult {
    fn from(reply: AskReply) -> Self {
        Self::from_reply(reply)
    }
}

impl std::fmt::Display for AnswerResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_becomes_success() {
        let result = AnswerResult::from_reply(AskReply::answer("X"));
        assert_eq!(result, AnswerResult::Success("X".to_string()));
        assert!(result.is_success());
    }

    #[test]
    fn test_error_becomes_failure() {
        let result = AnswerResult::from_reply(AskReply::error("Y"));
        assert_eq!(result, AnswerResult::Failure("Y".to_string()));
        assert_eq!(result.text(), "Y");
    }

    #[test]
    fn test_answer_takes_precedence_over_error() {
        let reply = AskReply {
            answer: Some("X".to_string()),
            error: Some("Y".to_string()),
        };
        assert_eq!(
            AnswerResult::from_reply(reply),
            AnswerResult::Success("X".to_string())
        );
    }

    #[test]
    fn test_empty_reply_falls_back_to_no_wisdom() {
        let result = AnswerResult::from_reply(AskReply::default());
        assert_eq!(result, AnswerResult::Failure(NO_WISDOM_MESSAGE.to_string()));
    }

    #[test]
    fn test_serialize_tagged() {
        let json = serde_json::to_value(AnswerResult::Success("ok".to_string())).unwrap();
        assert_eq!(json, serde_json::json!({"status": "success", "text": "ok"}));
    }
}
