//! Remote text-generation service.
//!
//! Provides a trait-based abstraction over the generation endpoint so the
//! controller can be driven by the real HTTP client in production and by
//! scripted services in tests.

use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;

use super::GenerationRequest;

/// Why a generation request failed.
///
/// `Transport` covers failures to reach the service; the other variants are
/// protocol failures where the service answered but not as expected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The request could not reach the service or the connection failed.
    #[error("{0}")]
    Transport(String),
    /// The service answered with a non-success status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The body was not valid JSON of the expected shape.
    #[error("malformed response body: {0}")]
    Malformed(String),
    /// The body was JSON but had no string `output` field.
    #[error("response is missing the \"output\" field")]
    MissingOutput,
}

impl GenerationError {
    /// Returns true if the service was never reached.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns true if the service answered with something unusable.
    #[must_use]
    pub const fn is_protocol(&self) -> bool {
        !self.is_transport()
    }
}

impl From<reqwest::Error> for GenerationError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Transport("request timed out".to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

/// Trait for generation backends.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Sends `request` and returns the generated text.
    ///
    /// # Errors
    ///
    /// Returns a [`GenerationError`] describing the transport or protocol failure.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

/// Success body of the generation endpoint.
#[derive(Debug, Deserialize)]
struct GenerationResponse {
    output: Option<serde_json::Value>,
}

/// Extracts the `output` string from a response body.
///
/// # Errors
///
/// Returns [`GenerationError::Malformed`] for non-JSON or non-object bodies
/// and [`GenerationError::MissingOutput`] if `output` is absent or not a string.
pub fn parse_output(body: &str) -> Result<String, GenerationError> {
    let response: GenerationResponse =
        serde_json::from_str(body).map_err(|e| GenerationError::Malformed(e.to_string()))?;
    match response.output {
        Some(serde_json::Value::String(text)) => Ok(text),
        _ => Err(GenerationError::MissingOutput),
    }
}

/// HTTP client for the generation endpoint.
#[derive(Debug, Clone)]
pub struct HttpGenerationService {
    http: Client,
    endpoint: Url,
}

impl HttpGenerationService {
    /// Creates a client posting to `endpoint` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(endpoint: Url, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { http, endpoint })
    }

    /// Creates a client posting to `endpoint` through a preconfigured `http` client.
    #[must_use]
    pub const fn with_client(endpoint: Url, http: Client) -> Self {
        Self { http, endpoint }
    }

    /// Returns the endpoint this client posts to.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl GenerationService for HttpGenerationService {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_output(&body)
    }
}
