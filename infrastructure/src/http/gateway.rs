//! HTTP adapter for the ask endpoint
//!
//! Implements [`AskGateway`] with a `reqwest` client: one `POST` with a JSON
//! body per question, no retries.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use stoic_application::{AskGateway, GatewayError};
use stoic_domain::{AskReply, Question};
use tracing::{debug, warn};

/// Endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/ask";

#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

/// [`AskGateway`] backed by `reqwest`
pub struct HttpAskGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAskGateway {
    /// Create a gateway for `endpoint` with no request timeout.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, GatewayError> {
        Self::with_timeout(endpoint, None)
    }

    /// Create a gateway with an optional whole-request timeout.
    pub fn with_timeout(
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, GatewayError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(client, endpoint))
    }

    /// Create a gateway around an existing client.
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    fn transport_error(e: reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            GatewayError::Timeout
        } else if e.is_connect() {
            GatewayError::Connection(e.to_string())
        } else {
            GatewayError::Other(e.to_string())
        }
    }
}

#[async_trait]
impl AskGateway for HttpAskGateway {
    async fn ask(&self, question: &Question) -> Result<AskReply, GatewayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&AskRequest {
                question: question.content(),
            })
            .send()
            .await
            .map_err(Self::transport_error)?;

        // The body decides success or failure; error statuses still carry
        // `{"error": ...}`.
        let status = response.status();
        if !status.is_success() {
            warn!("Ask endpoint returned HTTP {}", status.as_u16());
        }

        let body = response.bytes().await.map_err(Self::transport_error)?;
        debug!("Ask endpoint replied with {} bytes", body.len());

        let value: Value = serde_json::from_slice(&body).map_err(|e| {
            GatewayError::MalformedResponse(format!("HTTP {}: invalid JSON: {}", status.as_u16(), e))
        })?;

        AskReply::from_json(&value).ok_or_else(|| {
            GatewayError::MalformedResponse(format!("HTTP {}: body is JSON null", status.as_u16()))
        })
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
