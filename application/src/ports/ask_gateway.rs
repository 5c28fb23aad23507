//! Ask gateway port
//!
//! Defines the interface for sending a question to the ask endpoint.

use async_trait::async_trait;
use stoic_domain::{AskReply, Question};
use thiserror::Error;

/// Errors that can occur while talking to the ask endpoint
///
/// None of these messages are shown to the user; they are logged.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timeout")]
    Timeout,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// Gateway to the remote ask endpoint
///
/// Sends exactly one request per call. No retries.
#[async_trait]
pub trait AskGateway: Send + Sync {
    /// Send the question and decode the reply body
    async fn ask(&self, question: &Question) -> Result<AskReply, GatewayError>;

    /// Human-readable description of where questions go (for status output)
    fn endpoint(&self) -> &str;
}
