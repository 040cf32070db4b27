//! Gemini client implementation

use async_trait::async_trait;
use futures::StreamExt;
use reqwest::Client;

use crate::llm::core::{
    error::LlmError,
    provider::{EventStream, LlmProvider},
    types::GenerateRequest,
};

use super::mapper::{from_error_body, from_gemini_response, to_gemini_request};
use super::sse::parse_sse_stream;

/// Public endpoint of the Generative Language API
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini model identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeminiModel {
    /// Gemini 2.0 Flash
    Gemini20Flash,
}

impl GeminiModel {
    /// Get the model identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            GeminiModel::Gemini20Flash => "gemini-2.0-flash",
        }
    }
}

/// Client for the Gemini Generative Language API, authenticated by API key
pub struct GeminiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Key sent in the `x-goog-api-key` header
    api_key: String,
    /// Scheme and host, without a trailing slash
    base_url: String,
    /// Model to use
    model: GeminiModel,
}

impl GeminiClient {
    /// Create a new Gemini client
    ///
    /// Timeouts are left at the `reqwest` defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (e.g. TLS backend
    /// initialisation fails).
    pub fn new(api_key: impl Into<String>, model: GeminiModel) -> Result<Self, LlmError> {
        let http_client = Client::builder().build().map_err(|e| LlmError::HttpError {
            status: 0,
            body: format!("Failed to create HTTP client: {}", e),
        })?;

        Ok(Self {
            http_client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model,
        })
    }

    /// Point the client at a different host (a proxy or a local mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Build the endpoint URL for streaming
    fn build_endpoint_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:streamGenerateContent?alt=sse",
            self.base_url,
            self.model.as_str()
        )
    }

    /// Make a streaming request to Gemini
    async fn make_streaming_request(
        &self,
        request: GenerateRequest,
    ) -> Result<EventStream, LlmError> {
        let gemini_request = to_gemini_request(request);

        let url = self.build_endpoint_url();
        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&gemini_request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "Gemini request rejected");
            return Err(from_error_body(status.as_u16(), body));
        }

        let sse_stream = parse_sse_stream(response.bytes_stream());

        let event_stream = sse_stream.flat_map(|result| {
            let events: Vec<Result<_, LlmError>> = match result.and_then(from_gemini_response) {
                Ok(chunk_events) => chunk_events.into_iter().map(Ok).collect(),
                Err(e) => vec![Err(e)],
            };
            futures::stream::iter(events)
        });

        Ok(Box::pin(event_stream))
    }
}

#[async_trait]
impl LlmProvider for GeminiClient {
    async fn stream_generate(&self, request: GenerateRequest) -> Result<EventStream, LlmError> {
        self.make_streaming_request(request).await
    }
}
