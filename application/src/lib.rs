//! Application layer for stoic-companion
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    answer_view::AnswerView,
    ask_gateway::{AskGateway, GatewayError},
    response_exporter::{ExportError, ResponseExporter, ResponseSnapshot},
};
pub use use_cases::ask_controller::{AskController, SubmitOutcome};
pub use use_cases::save_response::SaveResponseUseCase;
