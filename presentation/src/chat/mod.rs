//! Interactive session module
//!
//! Provides a reedline-based interactive question/answer interface.

mod command;
mod repl;

pub use command::ReplCommand;
pub use repl::AskRepl;
