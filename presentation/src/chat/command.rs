//! Slash commands understood by the interactive session

use crate::config::expand_home;
use std::path::PathBuf;

/// A parsed `/command`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Clear,
    Save(Option<PathBuf>),
    State,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line; returns `None` if it is not a command (a question).
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let rest = line.strip_prefix('/')?;
        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        let command = match name {
            "help" | "h" | "?" => Self::Help,
            "clear" | "c" => Self::Clear,
            "save" | "s" => Self::Save((!arg.is_empty()).then(|| expand_home(arg))),
            "state" | "status" => Self::State,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        };
        Some(command)
    }

    pub fn help_text() -> &'static str {
        "Commands:
  /help, /h, /?      - Show this help
  /clear, /c         - Clear the question and the answer
  /save [dir], /s    - Save the current response to a text file
  /state             - Show the answer area state and endpoint
  /quit, /exit, /q   - Exit"
    }
}
