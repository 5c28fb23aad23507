//! REPL (Read-Eval-Print Loop) for asking questions interactively

use super::command::ReplCommand;
use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::PathBuf;
use std::sync::Arc;
use stoic_application::{AskController, ExportError, ResponseExporter, SaveResponseUseCase};
use tracing::warn;

const HISTORY_CAPACITY: usize = 1000;

const SAVED_PREFIX: &str = "Stoic response saved to";
const NOTHING_TO_SAVE: &str = "No response to save yet. Ask a question first.";
const SAVE_FAILED: &str = "Error saving response. Please try again.";

enum CommandResult {
    Exit,
    Continue,
}

/// Interactive question/answer session
pub struct AskRepl {
    controller: Arc<AskController>,
    save_response: SaveResponseUseCase,
    config: ReplConfig,
}

impl AskRepl {
    pub fn new(
        controller: Arc<AskController>,
        exporter: Arc<dyn ResponseExporter>,
        config: ReplConfig,
    ) -> Self {
        Self {
            controller,
            save_response: SaveResponseUseCase::new(exporter),
            config,
        }
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = self.config.history_file.clone() else {
            return editor;
        };

        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!("Could not create history directory {}: {}", parent.display(), e);
            return editor;
        }

        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("Could not open history file {}: {}", path.display(), e);
                editor
            }
        }
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> std::io::Result<()> {
        let mut line_editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("stoic".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    if let Some(command) = ReplCommand::parse(&line) {
                        match self.handle_command(command) {
                            CommandResult::Exit => break,
                            CommandResult::Continue => continue,
                        }
                    }

                    println!();
                    self.controller.submit_text(&line).await;
                    println!();
                }
                Signal::CtrlC => {
                    println!("^C");
                }
                Signal::CtrlD => {
                    println!("Farewell.");
                    break;
                }
            }
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│              Stoic Companion                │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{} {}", "Endpoint:".cyan().bold(), self.controller.endpoint());
        println!("Type a question and press Enter.");
        println!();
        println!("{}", ReplCommand::help_text());
        println!();
    }

    fn handle_command(&self, command: ReplCommand) -> CommandResult {
        match command {
            ReplCommand::Quit => {
                println!("Farewell.");
                return CommandResult::Exit;
            }
            ReplCommand::Help => {
                println!();
                println!("{}", ReplCommand::help_text());
                println!();
            }
            ReplCommand::Clear => {
                self.controller.clear();
                println!("Cleared.");
            }
            ReplCommand::Save(dir) => {
                println!("{}", self.save(dir));
            }
            ReplCommand::State => {
                println!(
                    "{}",
                    ConsoleFormatter::format_state(
                        &self.controller.state(),
                        self.controller.endpoint()
                    )
                );
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        CommandResult::Continue
    }

    /// Save the current response and return the notification to show.
    fn save(&self, dir: Option<PathBuf>) -> String {
        let dir = dir.unwrap_or_else(|| PathBuf::from("."));
        let snapshot = self.controller.snapshot();
        match self.save_response.execute(snapshot.as_ref(), &dir) {
            Ok(path) => format!("{} {}", SAVED_PREFIX, path.display()),
            Err(ExportError::NothingToExport) => NOTHING_TO_SAVE.to_string(),
            Err(ExportError::Io(_)) => SAVE_FAILED.to_string(),
        }
    }
}
