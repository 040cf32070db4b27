//! Error types for the LLM layer

use thiserror::Error;

/// Errors that can occur when invoking an LLM provider
///
/// Every failure on the way to a completion (transport, auth, provider-side,
/// malformed payloads) ends up as one of these. The `Display` text is what the
/// relay hands back to the browser, so it carries the underlying description
/// unmodified.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP request failures, including transport errors (status 0)
    #[error("HTTP error (status {status}): {body}")]
    HttpError { status: u16, body: String },

    /// SSE stream parsing failures
    #[error("Stream error: {0}")]
    StreamError(String),

    /// JSON encoding/decoding issues
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Structured error reported by the provider API
    #[error("Provider error ({code}): {message}")]
    ProviderError { code: String, message: String },

    /// The provider refused to answer the prompt
    #[error("Prompt blocked by provider: {0}")]
    Blocked(String),

    /// Anything else, carried verbatim
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        LlmError::SerializationError(err.to_string())
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        LlmError::HttpError {
            status: err.status().map(|s| s.as_u16()).unwrap_or(0),
            body: err.to_string(),
        }
    }
}
