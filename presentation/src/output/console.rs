//! Console output formatter for answers

use colored::Colorize;
use serde_json::json;
use stoic_application::SubmitOutcome;
use stoic_domain::UiState;

/// Formats answers for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// The answer panel: the text framed by a rule above and below
    pub fn format_panel(text: &str) -> String {
        let rule = "─".repeat(60);
        format!("{}\n{}\n{}", rule.dimmed(), text, rule.dimmed())
    }

    /// Format as JSON (`question`, `status`, `text`, `superseded`)
    pub fn format_json(question: &str, outcome: &SubmitOutcome) -> String {
        let mut body = json!({
            "question": question,
            "superseded": matches!(outcome, SubmitOutcome::Superseded),
        });
        if let Some(result) = outcome.result() {
            let status = if result.is_success() { "success" } else { "failure" };
            body["status"] = json!(status);
            body["text"] = json!(result.text());
        }
        serde_json::to_string_pretty(&body).unwrap_or_else(|_| "{}".to_string())
    }

    /// One-line status of the answer area
    pub fn format_state(state: &UiState, endpoint: &str) -> String {
        format!(
            "{} {}  {} {}",
            "State:".cyan().bold(),
            state,
            "Endpoint:".cyan().bold(),
            endpoint
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stoic_domain::AnswerResult;

    #[test]
    fn test_panel_contains_text() {
        colored::control::set_override(false);
        let panel = ConsoleFormatter::format_panel("Be still.");
        let lines: Vec<_> = panel.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Be still.");
    }

    #[test]
    fn test_format_json_success() {
        let outcome = SubmitOutcome::Displayed(AnswerResult::Success("X".to_string()));
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json("Why?", &outcome)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "question": "Why?",
                "status": "success",
                "text": "X",
                "superseded": false
            })
        );
    }

    #[test]
    fn test_format_json_failure() {
        let outcome = SubmitOutcome::Displayed(AnswerResult::Failure("Y".to_string()));
        let json: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json("Why?", &outcome)).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["text"], "Y");
    }

    #[test]
    fn test_format_state_mentions_endpoint() {
        colored::control::set_override(false);
        let line = ConsoleFormatter::format_state(&UiState::Loading, "http://127.0.0.1:5000/ask");
        assert!(line.contains("loading"));
        assert!(line.contains("http://127.0.0.1:5000/ask"));
    }
}
