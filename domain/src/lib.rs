//! Domain layer for stoic-companion
//!
//! This crate contains the core value objects of a question/answer round
//! trip. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Question**: trimmed, never-empty user input
//! - **AskReply**: what the ask endpoint sent back
//! - **AnswerResult**: `Success(text)` or `Failure(message)`, as displayed
//! - **UiState**: `Idle`, `Loading` or `Displaying(AnswerResult)`

pub mod answer;
pub mod config;
pub mod core;
pub mod ui;
pub mod util;

// Re-export commonly used types
pub use answer::{
    messages::{GENERIC_ERROR_MESSAGE, GUIDANCE_MESSAGE, LOADING_PLACEHOLDER, NO_WISDOM_MESSAGE},
    reply::AskReply,
    result::AnswerResult,
};
pub use config::OutputFormat;
pub use core::{error::DomainError, question::Question};
pub use ui::state::UiState;
