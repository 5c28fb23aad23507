//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for one-shot answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The answer text
    Text,
    /// JSON object with question, status and text
    Json,
}

impl From<OutputFormat> for stoic_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for stoic-companion
#[derive(Parser, Debug)]
#[command(name = "stoic-companion")]
#[command(author, version, about = "Ask a question, receive Stoic wisdom")]
#[command(long_about = r#"
Stoic Companion sends your question to an ask endpoint and shows the answer.

With a question it asks once and exits (non-zero if no answer came back).
Without one it starts an interactive session.

Configuration files are loaded from (in priority order):
1. STOIC_* environment variables (e.g. STOIC_ENDPOINT__URL)
2. --config <path>     Explicit config file
3. ./stoic.toml        Project-level config
4. ~/.config/stoic-companion/config.toml   Global config

Example:
  stoic-companion "How do I stop worrying about what others think?"
  stoic-companion --endpoint http://10.0.0.5:5000/ask -o json "What is virtue?"
  stoic-companion --chat
"#)]
pub struct Cli {
    /// The question to ask (words are joined with spaces)
    #[arg(value_name = "QUESTION", trailing_var_arg = true)]
    pub question: Vec<String>,

    /// Start interactive mode (default when no question is given)
    #[arg(short, long)]
    pub chat: bool,

    /// URL of the ask endpoint
    #[arg(short, long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Output format for one-shot mode
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the loading spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// The one-shot question, if any words were given
    pub fn question_text(&self) -> Option<String> {
        if self.question.is_empty() {
            None
        } else {
            Some(self.question.join(" "))
        }
    }

    /// Whether to run the interactive session
    pub fn is_interactive(&self) -> bool {
        self.chat || self.question.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_is_interactive() {
        let cli = Cli::parse_from(["stoic-companion"]);
        assert!(cli.is_interactive());
        assert!(cli.question_text().is_none());
    }

    #[test]
    fn test_question_words_are_joined() {
        let cli = Cli::parse_from(["stoic-companion", "What", "is", "virtue?"]);
        assert!(!cli.is_interactive());
        assert_eq!(cli.question_text().as_deref(), Some("What is virtue?"));
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "stoic-companion",
            "-vv",
            "-q",
            "--endpoint",
            "http://10.0.0.5:5000/ask",
            "--timeout",
            "15",
            "-o",
            "json",
            "Why?",
        ]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert_eq!(cli.endpoint.as_deref(), Some("http://10.0.0.5:5000/ask"));
        assert_eq!(cli.timeout, Some(15));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.question_text().as_deref(), Some("Why?"));
    }

    #[test]
    fn test_output_format_into_domain() {
        assert_eq!(
            stoic_domain::OutputFormat::from(OutputFormat::Json),
            stoic_domain::OutputFormat::Json
        );
    }
}
