//! Shared utility functions.

/// One-line preview of user text for log messages.
///
/// Newlines are folded into spaces and the result is cut to at most
/// `max_chars` characters, with `...` appended when something was cut.
pub fn log_preview(s: &str, max_chars: usize) -> String {
    let folded: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if folded.chars().count() <= max_chars {
        return folded;
    }
    let mut out: String = folded.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_short_text_unchanged() {
        assert_eq!(log_preview("hi", 10), "hi");
    }

    #[test]
    fn preview_cuts_long_text() {
        assert_eq!(log_preview("hello world", 5), "hello...");
    }

    #[test]
    fn preview_counts_chars_not_bytes() {
        assert_eq!(log_preview("あのね", 2), "あの...");
        assert_eq!(log_preview("あのね", 3), "あのね");
    }

    #[test]
    fn preview_folds_newlines() {
        assert_eq!(log_preview("a\nb\r\nc", 10), "a b  c");
    }
}
